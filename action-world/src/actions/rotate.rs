// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Constant angular velocity

use crate::actions::{
    ensure_entity, ensure_open_duration, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Rotation, Type};
use crate::ecs::components::Vec3;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;

#[derive(Debug, Clone, Copy)]
struct Rotate {
    velocity: Vec3,
    ttl: f32,
}

/// Adds `velocity * dt` to the rotation channel every tick
///
/// A `ttl` of zero spins until stopped.
#[derive(Debug, Default)]
pub struct RotateAction {
    table: InstanceTable<Rotate>,
}

impl RotateAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spin `id` with `velocity` radians per second around each axis
    pub fn attach(&mut self, store: &ChannelArray, id: ID, velocity: Vec3, ttl: f32) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_open_duration("rotate", ttl)?;
        self.table.insert(id, Rotate { velocity, ttl });
        Ok(())
    }
}

impl Action for RotateAction {
    fn action_type(&self) -> ActionType {
        ActionType::Rotate
    }

    fn name(&self) -> &str {
        "rotate"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let Some(rotation) = store.try_get::<Rotation>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            let timer = self.table.tick(i, dt);
            let r = *self.table.data(i);
            store.set::<Rotation>(id, rotation + r.velocity * dt);
            if r.ttl > 0.0 && timer >= r.ttl {
                events.add(id, ActionType::Rotate, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("Rotate");
        writer.start_table(&["ID", "Velocity", "TTL", "Timer"]);
        for (id, timer, r) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&r.velocity);
            writer.add_cell(&r.ttl);
            writer.add_cell(&timer);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
