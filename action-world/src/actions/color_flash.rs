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
//! Tween the tint between two colors

use crate::actions::repeat::{self, Cycle};
use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{self, Type};
use crate::ecs::components::Color;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::{interpolate, Tweening};

#[derive(Debug, Clone, Copy)]
struct ColorFlash {
    start: Color,
    end: Color,
    ttl: f32,
    mode: i32,
    tweening: Tweening,
}

/// Interpolates the color channel channel-wise, honoring the repeat mode
#[derive(Debug, Default)]
pub struct ColorFlashAction {
    table: InstanceTable<ColorFlash>,
}

impl ColorFlashAction {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        start: Color,
        end: Color,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("color_flash", ttl)?;
        self.table.insert(
            id,
            ColorFlash {
                start,
                end,
                ttl,
                mode: repeat::initial_mode(mode),
                tweening,
            },
        );
        store.set::<channels::Color>(id, start);
        Ok(())
    }
}

impl Action for ColorFlashAction {
    fn action_type(&self) -> ActionType {
        ActionType::ColorFlash
    }

    fn name(&self) -> &str {
        "color_flash"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let (id, timer, c) = self.table.entry_mut(i);
            *timer += dt;
            let value = interpolate(c.tweening, c.start, c.end, *timer, c.ttl);
            if !store.try_set::<channels::Color>(id, value) {
                self.table.swap_remove(i);
                continue;
            }
            if repeat::advance(&mut c.mode, timer, c.ttl) == Cycle::Finished {
                events.add(id, ActionType::ColorFlash, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("ColorFlash");
        writer.start_table(&["ID", "Start", "End", "TTL", "Timer", "Mode"]);
        for (id, timer, c) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&c.start);
            writer.add_cell(&c.end);
            writer.add_cell(&c.ttl);
            writer.add_cell(&timer);
            writer.add_cell(&c.mode);
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
    fn test_flash_once() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = ColorFlashAction::new();
        let mut events = ActionEventBuffer::new();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        engine
            .attach(&mut store, id, Color::WHITE, red, 1.0, 0, Tweening::Linear)
            .unwrap();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<channels::Color>(id), Color::new(1.0, 0.5, 0.5, 1.0));

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<channels::Color>(id), red);
        assert!(events.contains(id, ActionType::ColorFlash));
    }

    #[test]
    fn test_flash_bounces() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = ColorFlashAction::new();
        let mut events = ActionEventBuffer::new();
        engine
            .attach(
                &mut store,
                id,
                Color::WHITE,
                Color::new(0.0, 0.0, 0.0, 1.0),
                0.5,
                3,
                Tweening::Linear,
            )
            .unwrap();
        engine.update(0.5, &mut store, &mut events);
        engine.update(0.5, &mut store, &mut events);
        assert!(events.is_empty());
        engine.update(0.5, &mut store, &mut events);
        assert_eq!(events.len(), 1);
    }
}
