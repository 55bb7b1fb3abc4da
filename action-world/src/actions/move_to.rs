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
//! Tweened movement between two points

use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Position, Type};
use crate::ecs::components::Vec3;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::{interpolate, Tweening};

#[derive(Debug, Clone, Copy)]
struct MoveTo {
    start: Vec3,
    end: Vec3,
    ttl: f32,
    tweening: Tweening,
}

/// Moves entities from a start to an end position along an easing curve
#[derive(Debug, Default)]
pub struct MoveToAction {
    table: InstanceTable<MoveTo>,
}

impl MoveToAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `id` at `start` and move it to `end` within `ttl` seconds
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("move_to", ttl)?;
        self.table.insert(
            id,
            MoveTo {
                start,
                end,
                ttl,
                tweening,
            },
        );
        store.set::<Position>(id, start);
        Ok(())
    }
}

impl Action for MoveToAction {
    fn action_type(&self) -> ActionType {
        ActionType::MoveTo
    }

    fn name(&self) -> &str {
        "move_to"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            if !store.contains(id) {
                self.table.swap_remove(i);
                continue;
            }
            let timer = self.table.tick(i, dt);
            let m = *self.table.data(i);
            if timer >= m.ttl {
                store.set::<Position>(id, m.end);
                events.add(id, ActionType::MoveTo, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            store.set::<Position>(id, interpolate(m.tweening, m.start, m.end, timer, m.ttl));
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("MoveTo");
        writer.start_table(&["ID", "Start", "End", "TTL", "Timer"]);
        for (id, timer, m) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&m.start);
            writer.add_cell(&m.end);
            writer.add_cell(&m.ttl);
            writer.add_cell(&timer);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
