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
//! Fade the alpha component towards a target value

use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Color, Type};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::Tweening;

#[derive(Debug, Clone, Copy)]
struct AlphaFade {
    start: f32,
    end: f32,
    ttl: f32,
    tweening: Tweening,
}

/// Tweens only the alpha of the color channel from `start` to `end`
///
/// `start` is written on attach; red, green and blue are left alone.
#[derive(Debug, Default)]
pub struct AlphaFadeToAction {
    table: InstanceTable<AlphaFade>,
}

impl AlphaFadeToAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        start: f32,
        end: f32,
        ttl: f32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("alpha_fade_to", ttl)?;
        let mut color = store.get::<Color>(id);
        color.a = start;
        store.set::<Color>(id, color);
        self.table.insert(
            id,
            AlphaFade {
                start,
                end,
                ttl,
                tweening,
            },
        );
        Ok(())
    }
}

impl Action for AlphaFadeToAction {
    fn action_type(&self) -> ActionType {
        ActionType::AlphaFadeTo
    }

    fn name(&self) -> &str {
        "alpha_fade_to"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let Some(mut color) = store.try_get::<Color>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            let timer = self.table.tick(i, dt);
            let f = *self.table.data(i);
            let done = timer >= f.ttl;
            color.a = if done {
                f.end
            } else {
                f.tweening.apply(timer, f.start, f.end, f.ttl)
            };
            store.set::<Color>(id, color);
            if done {
                events.add(id, ActionType::AlphaFadeTo, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("AlphaFadeTo");
        writer.start_table(&["ID", "Start", "End", "TTL", "Timer"]);
        for (id, timer, f) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&f.start);
            writer.add_cell(&f.end);
            writer.add_cell(&f.ttl);
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
    fn test_fade_out() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = AlphaFadeToAction::new();
        let mut events = ActionEventBuffer::new();
        engine.attach(&mut store, id, 1.0, 0.0, 1.0, Tweening::Linear).unwrap();

        engine.update(0.25, &mut store, &mut events);
        let color = store.get::<Color>(id);
        assert_eq!(color.a, 0.75);
        assert_eq!(color.r, 1.0);

        engine.update(0.75, &mut store, &mut events);
        assert_eq!(store.get::<Color>(id).a, 0.0);
        assert!(events.contains(id, ActionType::AlphaFadeTo));
    }

    #[test]
    fn test_fade_in_writes_start() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = AlphaFadeToAction::new();
        let mut events = ActionEventBuffer::new();
        engine.attach(&mut store, id, 0.0, 1.0, 2.0, Tweening::Linear).unwrap();
        assert_eq!(store.get::<Color>(id).a, 0.0);

        engine.update(1.0, &mut store, &mut events);
        assert_eq!(store.get::<Color>(id).a, 0.5);
        assert!(events.is_empty());

        engine.update(1.0, &mut store, &mut events);
        assert_eq!(store.get::<Color>(id).a, 1.0);
        assert!(events.contains(id, ActionType::AlphaFadeTo));
    }
}
