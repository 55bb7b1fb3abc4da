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
//! Scalar tween applied to selected scale axes

use crate::actions::repeat::{self, Cycle};
use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Scale, Type};
use crate::ecs::components::Vec3;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::Tweening;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale axes driven by a [`ScaleAxesAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
    /// Both planar axes
    #[default]
    Xy,
}

impl Axis {
    /// Copy of `scale` with the selected axes set to `value`
    pub fn apply(self, mut scale: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => scale.x = value,
            Axis::Y => scale.y = value,
            Axis::Z => scale.z = value,
            Axis::Xy => {
                scale.x = value;
                scale.y = value;
            }
        }
        scale
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Xy => "xy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
struct ScaleAxes {
    axis: Axis,
    start: f32,
    end: f32,
    ttl: f32,
    mode: i32,
    tweening: Tweening,
}

/// Tweens one or two components of the scale channel, leaving the others
/// untouched
#[derive(Debug, Default)]
pub struct ScaleAxesAction {
    table: InstanceTable<ScaleAxes>,
}

impl ScaleAxesAction {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        axis: Axis,
        start: f32,
        end: f32,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("scale_axes", ttl)?;
        self.table.insert(
            id,
            ScaleAxes {
                axis,
                start,
                end,
                ttl,
                mode: repeat::initial_mode(mode),
                tweening,
            },
        );
        let scale = store.get::<Scale>(id);
        store.set::<Scale>(id, axis.apply(scale, start));
        Ok(())
    }
}

impl Action for ScaleAxesAction {
    fn action_type(&self) -> ActionType {
        ActionType::ScaleAxes
    }

    fn name(&self) -> &str {
        "scale_axes"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let (id, timer, s) = self.table.entry_mut(i);
            let Some(scale) = store.try_get::<Scale>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            *timer += dt;
            let value = s.tweening.apply(*timer, s.start, s.end, s.ttl);
            store.set::<Scale>(id, s.axis.apply(scale, value));

            if repeat::advance(&mut s.mode, timer, s.ttl) == Cycle::Finished {
                events.add(id, ActionType::ScaleAxes, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("ScaleAxes");
        writer.start_table(&["ID", "Axis", "Start", "End", "TTL", "Timer", "Mode"]);
        for (id, timer, s) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&s.axis);
            writer.add_cell(&s.start);
            writer.add_cell(&s.end);
            writer.add_cell(&s.ttl);
            writer.add_cell(&timer);
            writer.add_cell(&s.mode);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
