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
//! Turn towards another entity at a bounded angular speed

use crate::actions::{ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType, InstanceTable};
use crate::ecs::channels::{Position, Rotation};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use std::f32::consts::{PI, TAU};

/// Wrap an angle into `(-PI, PI]`
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

#[derive(Debug, Clone, Copy)]
struct RotateToTarget {
    target: ID,
    angular_velocity: f32,
}

/// Keeps turning an entity towards a target, at most `angular_velocity`
/// radians per second, along the shorter direction
///
/// Runs until stopped. An instance whose target disappears is dropped.
#[derive(Debug, Default)]
pub struct RotateToTargetAction {
    table: InstanceTable<RotateToTarget>,
}

impl RotateToTargetAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(
        &mut self,
        store: &ChannelArray,
        id: ID,
        target: ID,
        angular_velocity: f32,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_entity(store, target)?;
        self.table.insert(
            id,
            RotateToTarget {
                target,
                angular_velocity: angular_velocity.abs(),
            },
        );
        Ok(())
    }
}

impl Action for RotateToTargetAction {
    fn action_type(&self) -> ActionType {
        ActionType::RotateToTarget
    }

    fn name(&self) -> &str {
        "rotate_to_target"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, _events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let r = *self.table.data(i);
            let (Some(position), Some(goal), Some(mut rotation)) = (
                store.try_get::<Position>(id),
                store.try_get::<Position>(r.target),
                store.try_get::<Rotation>(id),
            ) else {
                tracing::trace!(%id, target = %r.target, "dropping rotate_to_target");
                self.table.swap_remove(i);
                continue;
            };
            self.table.tick(i, dt);

            let delta = goal - position;
            if delta.x != 0.0 || delta.y != 0.0 {
                let desired = delta.xy().angle();
                let diff = wrap_angle(desired - rotation.x);
                let step = r.angular_velocity * dt;
                rotation.x = if diff.abs() <= step {
                    desired
                } else {
                    wrap_angle(rotation.x + step * diff.signum())
                };
                store.set::<Rotation>(id, rotation);
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("RotateToTarget");
        writer.start_table(&["ID", "Target", "Angular velocity"]);
        for (id, _, r) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&r.target);
            writer.add_cell(&r.angular_velocity);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
