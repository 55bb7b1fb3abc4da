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
//! Keep entities of the same type apart

use crate::actions::{ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType, InstanceTable};
use crate::ecs::channels::{Force, Position, Type};
use crate::ecs::components::Vec3;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::{WorldError, WorldResult};
use crate::report::ReportWriter;

#[derive(Debug, Clone, Copy)]
struct Separate {
    entity_type: i32,
    min_distance: f32,
    relaxation: f32,
}

/// Pushes an entity away from every entity of a given type closer than
/// `min_distance`
///
/// For each neighbor the push is the overlap `min_distance - distance` along
/// the separating direction, scaled by `relaxation`. This is a positional
/// correction: `relaxation` is the fraction of the overlap resolved per tick
/// and the push is not scaled by `dt`. Pushes are added to the force channel
/// after all of them were computed, so the result does not depend on table
/// order.
#[derive(Debug, Default)]
pub struct SeparateAction {
    table: InstanceTable<Separate>,
    pushes: Vec<(ID, Vec3)>,
}

impl SeparateAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(
        &mut self,
        store: &ChannelArray,
        id: ID,
        entity_type: i32,
        min_distance: f32,
        relaxation: f32,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        if min_distance.is_nan() || min_distance <= 0.0 {
            return Err(WorldError::InvalidParameter(format!(
                "separate distance must be positive (got {})",
                min_distance
            )));
        }
        self.table.insert(
            id,
            Separate {
                entity_type,
                min_distance,
                relaxation: relaxation.clamp(0.0, 1.0),
            },
        );
        Ok(())
    }
}

impl Action for SeparateAction {
    fn action_type(&self) -> ActionType {
        ActionType::Separate
    }

    fn name(&self) -> &str {
        "separate"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, _events: &mut ActionEventBuffer) {
        self.pushes.clear();
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let Some(me) = store.try_get::<Position>(id) else {
                self.table.swap_remove(i);
                continue;
            };
            self.table.tick(i, dt);
            let s = *self.table.data(i);

            let ids = store.ids();
            let positions = store.column::<Position>();
            let types = store.column::<Type>();
            let mut push = Vec3::ZERO;
            for row in 0..ids.len() {
                if types[row] != s.entity_type || ids[row] == id {
                    continue;
                }
                let delta = me - positions[row];
                let distance = delta.length();
                if distance > f32::EPSILON && distance < s.min_distance {
                    push += delta * ((s.min_distance - distance) / distance);
                }
            }
            if push != Vec3::ZERO {
                self.pushes.push((id, push * s.relaxation));
            }
            i += 1;
        }

        for (id, push) in self.pushes.drain(..) {
            let force = store.get::<Force>(id);
            store.set::<Force>(id, force + push);
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("Separate");
        writer.start_table(&["ID", "Type", "Min distance", "Relaxation"]);
        for (id, _, s) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&s.entity_type);
            writer.add_cell(&s.min_distance);
            writer.add_cell(&s.relaxation);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
