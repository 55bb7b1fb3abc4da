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
//! Delayed removal

use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::Type;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;

/// Requests removal of an entity once `ttl` seconds have passed
///
/// The engine never removes the entity itself: it raises a
/// [`ActionType::Kill`] event which the world resolves when it drains the
/// event buffer at the end of the tick.
#[derive(Debug, Default)]
pub struct RemoveAfterAction {
    table: InstanceTable<f32>,
}

impl RemoveAfterAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, store: &ChannelArray, id: ID, ttl: f32) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("remove_after", ttl)?;
        self.table.insert(id, ttl);
        Ok(())
    }

    /// Seconds left before `id` is removed
    pub fn remaining(&self, id: ID) -> Option<f32> {
        let index = self.table.find(id)?;
        Some((*self.table.data(index) - self.table.timer(index)).max(0.0))
    }
}

impl Action for RemoveAfterAction {
    fn action_type(&self) -> ActionType {
        ActionType::RemoveAfter
    }

    fn name(&self) -> &str {
        "remove_after"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let Some(entity_type) = store.try_get::<Type>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            let timer = self.table.tick(i, dt);
            if timer >= *self.table.data(i) {
                events.add(id, ActionType::Kill, entity_type);
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("RemoveAfter");
        writer.start_table(&["ID", "TTL", "Timer"]);
        for (id, timer, ttl) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(ttl);
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

    #[test]
    fn test_raises_kill_after_ttl() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Type>(id, 5);
        let mut engine = RemoveAfterAction::new();
        let mut events = ActionEventBuffer::new();
        engine.attach(&store, id, 1.0).unwrap();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(engine.remaining(id), Some(0.5));
        assert!(events.is_empty());

        engine.update(0.5, &mut store, &mut events);
        assert!(events.contains(id, ActionType::Kill));
        assert_eq!(events.get(0).map(|e| e.entity_type), Some(5));
        // the store is untouched until the world drains the events
        assert!(store.contains(id));
        assert!(engine.is_empty());
    }
}
