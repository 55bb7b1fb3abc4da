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
//! Rotate by a fixed angle over time

use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Rotation, Type};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::Tweening;

#[derive(Debug, Clone, Copy)]
struct RotateBy {
    start: f32,
    end: f32,
    ttl: f32,
    tweening: Tweening,
}

/// Turns the planar angle (rotation x) by a relative amount
#[derive(Debug, Default)]
pub struct RotateByAction {
    table: InstanceTable<RotateBy>,
}

impl RotateByAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn `id` by `angle` radians, starting from its current angle
    pub fn attach(
        &mut self,
        store: &ChannelArray,
        id: ID,
        angle: f32,
        ttl: f32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("rotate_by", ttl)?;
        let start = store.get::<Rotation>(id).x;
        self.table.insert(
            id,
            RotateBy {
                start,
                end: start + angle,
                ttl,
                tweening,
            },
        );
        Ok(())
    }
}

impl Action for RotateByAction {
    fn action_type(&self) -> ActionType {
        ActionType::RotateBy
    }

    fn name(&self) -> &str {
        "rotate_by"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let Some(mut rotation) = store.try_get::<Rotation>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            let timer = self.table.tick(i, dt);
            let r = *self.table.data(i);
            let done = timer >= r.ttl;
            rotation.x = if done {
                r.end
            } else {
                r.tweening.apply(timer, r.start, r.end, r.ttl)
            };
            store.set::<Rotation>(id, rotation);
            if done {
                events.add(id, ActionType::RotateBy, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("RotateBy");
        writer.start_table(&["ID", "Start", "End", "TTL", "Timer"]);
        for (id, timer, r) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&r.start);
            writer.add_cell(&r.end);
            writer.add_cell(&r.ttl);
            writer.add_cell(&timer);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Vec3;

    #[test]
    fn test_rotates_relative_to_current_angle() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Rotation>(id, Vec3::new(1.0, 0.0, 0.0));
        let mut engine = RotateByAction::new();
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&store, id, 2.0, 1.0, Tweening::Linear)
            .unwrap();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Rotation>(id).x, 2.0);
        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Rotation>(id).x, 3.0);
        assert!(events.contains(id, ActionType::RotateBy));
    }
}
