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
//! Constant-velocity movement with optional wall bouncing

use crate::actions::{
    ensure_entity, ensure_open_duration, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Position, Rotation, Scale, Texture, Type};
use crate::ecs::components::{Rect, Vec3};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;

#[derive(Debug, Clone, Copy)]
struct MoveBy {
    velocity: Vec3,
    ttl: f32,
    bounce: bool,
}

/// Moves entities by a velocity in units per second
///
/// A `ttl` of zero keeps the entity moving until the action is stopped.
/// Bouncing instances flip the velocity component of every axis on which
/// the entity's extent leaves the world rectangle, and turn the entity to
/// face its new heading.
#[derive(Debug)]
pub struct MoveByAction {
    table: InstanceTable<MoveBy>,
    bounds: Rect,
}

impl MoveByAction {
    pub fn new(bounds: Rect) -> Self {
        MoveByAction {
            table: InstanceTable::new(),
            bounds,
        }
    }

    /// World rectangle used by bouncing instances
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Start moving `id` by `velocity`
    ///
    /// The entity is turned to face the direction of travel right away.
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        velocity: Vec3,
        ttl: f32,
        bounce: bool,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_open_duration("move_by", ttl)?;
        self.table.insert(
            id,
            MoveBy {
                velocity,
                ttl,
                bounce,
            },
        );
        face_heading(store, id, velocity);
        Ok(())
    }

    /// Start moving `id` at `speed` along the angle stored in its rotation
    pub fn attach_radial(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        speed: f32,
        ttl: f32,
        bounce: bool,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        let angle = store.get::<Rotation>(id).x;
        let velocity = Vec3::new(angle.cos() * speed, angle.sin() * speed, 0.0);
        self.attach(store, id, velocity, ttl, bounce)
    }

    /// Current velocity of the instance attached to `id`
    pub fn velocity(&self, id: ID) -> Option<Vec3> {
        self.table.get(id).map(|m| m.velocity)
    }

    /// Replace the velocity of a running instance; returns `false` if `id`
    /// has none
    pub fn set_velocity(&mut self, id: ID, velocity: Vec3) -> bool {
        match self.table.get_mut(id) {
            Some(m) => {
                m.velocity = velocity;
                true
            }
            None => false,
        }
    }
}

impl Default for MoveByAction {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

/// Store the planar heading of `velocity` in the rotation channel
fn face_heading(store: &mut ChannelArray, id: ID, velocity: Vec3) {
    if velocity.x == 0.0 && velocity.y == 0.0 {
        return;
    }
    if let Some(mut rotation) = store.try_get::<Rotation>(id) {
        rotation.x = velocity.xy().angle();
        store.try_set::<Rotation>(id, rotation);
    }
}

/// Flip the velocity on every axis where `next` pushes the entity's extent
/// out of `bounds` while still heading outward; returns whether anything
/// flipped
fn bounce(bounds: &Rect, next: Vec3, half_width: f32, half_height: f32, velocity: &mut Vec3) -> bool {
    let mut flipped = false;
    if (next.x - half_width < bounds.x && velocity.x < 0.0)
        || (next.x + half_width > bounds.right() && velocity.x > 0.0)
    {
        velocity.x = -velocity.x;
        flipped = true;
    }
    if (next.y - half_height < bounds.y && velocity.y < 0.0)
        || (next.y + half_height > bounds.bottom() && velocity.y > 0.0)
    {
        velocity.y = -velocity.y;
        flipped = true;
    }
    flipped
}

impl Action for MoveByAction {
    fn action_type(&self) -> ActionType {
        ActionType::MoveBy
    }

    fn name(&self) -> &str {
        "move_by"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let bounds = self.bounds;
            let (id, timer, data) = self.table.entry_mut(i);
            let Some(position) = store.try_get::<Position>(id) else {
                tracing::trace!(%id, "dropping move_by for vanished entity");
                self.table.swap_remove(i);
                continue;
            };

            *timer += dt;
            let mut next = position + data.velocity * dt;
            if data.bounce {
                let dim = store.get::<Texture>(id).dim;
                let scale = store.get::<Scale>(id);
                let (hw, hh) = (dim.x * scale.x * 0.5, dim.y * scale.y * 0.5);
                if bounce(&bounds, next, hw, hh, &mut data.velocity) {
                    next = position + data.velocity * dt;
                    face_heading(store, id, data.velocity);
                }
            }
            store.set::<Position>(id, next);

            if data.ttl > 0.0 && *timer >= data.ttl {
                events.add(id, ActionType::MoveBy, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("MoveBy");
        writer.start_table(&["ID", "Velocity", "TTL", "Timer", "Bounce"]);
        for (id, timer, m) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&m.velocity);
            writer.add_cell(&m.ttl);
            writer.add_cell(&timer);
            writer.add_cell(&m.bounce);
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
    use crate::ecs::components::Texture as TextureValue;

    fn world_rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_moves_and_finishes() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Type>(id, 3);
        let mut engine = MoveByAction::new(world_rect());
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&mut store, id, Vec3::new(2.0, 0.0, 0.0), 1.0, false)
            .unwrap();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Position>(id), Vec3::new(1.0, 0.0, 0.0));
        assert!(events.is_empty());

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Position>(id), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events.get(0).map(|e| e.entity_type), Some(3));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_zero_ttl_runs_forever() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = MoveByAction::new(world_rect());
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&mut store, id, Vec3::new(1.0, 0.0, 0.0), 0.0, false)
            .unwrap();
        for _ in 0..20 {
            engine.update(0.5, &mut store, &mut events);
        }
        assert!(events.is_empty());
        assert!(engine.contains(id));
    }

    #[test]
    fn test_negative_ttl_runs_forever() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = MoveByAction::new(world_rect());
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&mut store, id, Vec3::new(1.0, 0.0, 0.0), -1.0, false)
            .unwrap();
        for _ in 0..8 {
            engine.update(0.5, &mut store, &mut events);
        }
        assert!(events.is_empty());
        assert_eq!(store.get::<Position>(id), Vec3::new(4.0, 0.0, 0.0));
        assert!(engine
            .attach(&mut store, id, Vec3::ONE, f32::NAN, false)
            .is_err());
    }

    #[test]
    fn test_attach_faces_heading() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = MoveByAction::default();
        engine
            .attach(&mut store, id, Vec3::new(0.0, 1.0, 0.0), 0.0, false)
            .unwrap();
        let angle = store.get::<Rotation>(id).x;
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_flips_offending_axis_only() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Texture>(id, TextureValue::new(1, 10.0, 10.0));
        store.set::<Position>(id, Vec3::new(94.0, 50.0, 0.0));
        let mut engine = MoveByAction::new(world_rect());
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&mut store, id, Vec3::new(4.0, 2.0, 0.0), 0.0, true)
            .unwrap();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(engine.velocity(id), Some(Vec3::new(-4.0, 2.0, 0.0)));
        assert_eq!(store.get::<Position>(id), Vec3::new(92.0, 51.0, 0.0));
    }

    #[test]
    fn test_radial_uses_rotation() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Rotation>(id, Vec3::ZERO);
        let mut engine = MoveByAction::default();
        engine.attach_radial(&mut store, id, 3.0, 0.0, false).unwrap();
        assert_eq!(engine.velocity(id), Some(Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn test_vanished_entity_is_dropped() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = MoveByAction::default();
        let mut events = ActionEventBuffer::new();
        engine
            .attach(&mut store, id, Vec3::new(1.0, 0.0, 0.0), 1.0, false)
            .unwrap();
        store.remove(id);
        engine.update(0.5, &mut store, &mut events);
        assert!(engine.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_attach_to_missing_entity_fails() {
        let mut store = ChannelArray::new();
        let mut engine = MoveByAction::default();
        let err = engine.attach(&mut store, ID::new(9, 0), Vec3::ZERO, 1.0, false);
        assert!(err.is_err());
    }
}
