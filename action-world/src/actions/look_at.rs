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
//! Face another entity

use crate::actions::{
    ensure_entity, ensure_open_duration, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Position, Rotation, Type};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;

#[derive(Debug, Clone, Copy)]
struct LookAt {
    target: ID,
    ttl: f32,
}

/// Snaps the planar angle of an entity towards a target every tick
///
/// With a `ttl` of zero the entity keeps tracking its target until the
/// action is stopped or the target disappears.
#[derive(Debug, Default)]
pub struct LookAtAction {
    table: InstanceTable<LookAt>,
}

impl LookAtAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` face `target`; the angle is written immediately
    pub fn attach(&mut self, store: &mut ChannelArray, id: ID, target: ID, ttl: f32) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_entity(store, target)?;
        ensure_open_duration("look_at", ttl)?;
        self.table.insert(id, LookAt { target, ttl });
        face(store, id, target);
        Ok(())
    }
}

/// Turn `id` towards `target`; `false` if either is gone
fn face(store: &mut ChannelArray, id: ID, target: ID) -> bool {
    let (Some(from), Some(to), Some(mut rotation)) = (
        store.try_get::<Position>(id),
        store.try_get::<Position>(target),
        store.try_get::<Rotation>(id),
    ) else {
        return false;
    };
    let delta = to - from;
    if delta.x != 0.0 || delta.y != 0.0 {
        rotation.x = delta.xy().angle();
        store.set::<Rotation>(id, rotation);
    }
    true
}

impl Action for LookAtAction {
    fn action_type(&self) -> ActionType {
        ActionType::LookAt
    }

    fn name(&self) -> &str {
        "look_at"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let l = *self.table.data(i);
            if !face(store, id, l.target) {
                self.table.swap_remove(i);
                continue;
            }
            let timer = self.table.tick(i, dt);
            if l.ttl > 0.0 && timer >= l.ttl {
                events.add(id, ActionType::LookAt, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("LookAt");
        writer.start_table(&["ID", "Target", "TTL", "Timer"]);
        for (id, timer, l) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&l.target);
            writer.add_cell(&l.ttl);
            writer.add_cell(&timer);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
