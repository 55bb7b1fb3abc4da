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
//! Steering towards a target through the force channel

use crate::actions::{ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType, InstanceTable};
use crate::ecs::channels::{Force, Position, Rotation};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;

#[derive(Debug, Clone, Copy)]
struct Seek {
    target: ID,
    velocity: f32,
}

/// Pushes an entity towards a target at `velocity` units per second
///
/// The push is added to the force channel, so it combines with every other
/// force producer and is applied by the integration pass. The entity is
/// turned to face the target. Runs until stopped or until the target
/// disappears.
#[derive(Debug, Default)]
pub struct SeekAction {
    table: InstanceTable<Seek>,
}

impl SeekAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, store: &ChannelArray, id: ID, target: ID, velocity: f32) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_entity(store, target)?;
        self.table.insert(id, Seek { target, velocity });
        Ok(())
    }
}

impl Action for SeekAction {
    fn action_type(&self) -> ActionType {
        ActionType::Seek
    }

    fn name(&self) -> &str {
        "seek"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, _events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let s = *self.table.data(i);
            let (Some(position), Some(goal)) = (
                store.try_get::<Position>(id),
                store.try_get::<Position>(s.target),
            ) else {
                tracing::trace!(%id, target = %s.target, "dropping seek");
                self.table.swap_remove(i);
                continue;
            };
            self.table.tick(i, dt);

            let delta = goal - position;
            let distance = delta.length();
            if distance > f32::EPSILON {
                let dir = delta * (1.0 / distance);
                // never overshoot the target within one tick
                let step = (s.velocity * dt).min(distance);
                let force = store.get::<Force>(id);
                store.set::<Force>(id, force + dir * step);
                let mut rotation = store.get::<Rotation>(id);
                rotation.x = dir.xy().angle();
                store.set::<Rotation>(id, rotation);
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("Seek");
        writer.start_table(&["ID", "Target", "Velocity"]);
        for (id, _, s) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&s.target);
            writer.add_cell(&s.velocity);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
