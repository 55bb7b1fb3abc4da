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
//! Pairwise collision detection
//!
//! Every entity with a collider is tested against every other one once per
//! tick. Detection only reports: each colliding pair is recorded as a
//! [`Collision`] and raises one [`ActionType::Collision`] event per
//! participant. Reacting to a collision (removal, damage, bouncing) is left
//! to the behavior layer.

use crate::actions::{ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType, InstanceTable};
use crate::ecs::channels::{Position, Scale, Texture, Type};
use crate::ecs::components::{Vec2, Vec3};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collider shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    /// Circle whose diameter is the extent's width
    #[default]
    Circle,
    /// Axis-aligned box of the extent's size
    Box,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Circle => f.write_str("circle"),
            ShapeType::Box => f.write_str("box"),
        }
    }
}

/// One colliding pair, in detection order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub first: ID,
    pub first_type: i32,
    pub first_position: Vec3,
    pub second: ID,
    pub second_type: i32,
    pub second_position: Vec3,
}

impl Collision {
    /// Check whether `id` takes part in the collision
    pub fn involves(&self, id: ID) -> bool {
        self.first == id || self.second == id
    }

    /// The other participant, if `id` takes part
    pub fn other(&self, id: ID) -> Option<ID> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Participant with the given type tag, `first` winning a tie
    pub fn id_by_type(&self, entity_type: i32) -> Option<ID> {
        if self.first_type == entity_type {
            Some(self.first)
        } else if self.second_type == entity_type {
            Some(self.second)
        } else {
            None
        }
    }

    /// Check whether the pair is made of the two types, in either order
    pub fn is_between(&self, a: i32, b: i32) -> bool {
        (self.first_type == a && self.second_type == b)
            || (self.first_type == b && self.second_type == a)
    }
}

#[derive(Debug, Clone, Copy)]
struct Collider {
    shape: ShapeType,
    extent: Vec2,
}

/// Snapshot of a collider used during the pair scan
#[derive(Debug, Clone, Copy)]
struct Body {
    id: ID,
    entity_type: i32,
    position: Vec3,
    shape: ShapeType,
    half: Vec2,
}

fn overlaps(a: &Body, b: &Body) -> bool {
    let dx = b.position.x - a.position.x;
    let dy = b.position.y - a.position.y;
    match (a.shape, b.shape) {
        (ShapeType::Circle, ShapeType::Circle) => {
            let r = a.half.x + b.half.x;
            dx * dx + dy * dy < r * r
        }
        (ShapeType::Box, ShapeType::Box) => {
            dx.abs() < a.half.x + b.half.x && dy.abs() < a.half.y + b.half.y
        }
        (ShapeType::Circle, ShapeType::Box) => circle_box(a, b),
        (ShapeType::Box, ShapeType::Circle) => circle_box(b, a),
    }
}

fn circle_box(circle: &Body, rect: &Body) -> bool {
    let cx = circle.position.x.clamp(
        rect.position.x - rect.half.x,
        rect.position.x + rect.half.x,
    );
    let cy = circle.position.y.clamp(
        rect.position.y - rect.half.y,
        rect.position.y + rect.half.y,
    );
    let dx = circle.position.x - cx;
    let dy = circle.position.y - cy;
    dx * dx + dy * dy < circle.half.x * circle.half.x
}

/// Detects overlapping colliders
///
/// # Example
///
/// ```
/// use action_world::actions::{Action, ActionEventBuffer, CollisionAction, ShapeType};
/// use action_world::ecs::channels::Position;
/// use action_world::ecs::components::{Vec2, Vec3};
/// use action_world::ecs::ChannelArray;
///
/// let mut store = ChannelArray::new();
/// let a = store.add();
/// let b = store.add();
/// store.set::<Position>(b, Vec3::new(3.0, 0.0, 0.0));
///
/// let mut engine = CollisionAction::new();
/// let mut events = ActionEventBuffer::new();
/// engine.attach_with_extent(&store, a, ShapeType::Circle, Vec2::new(4.0, 4.0)).unwrap();
/// engine.attach_with_extent(&store, b, ShapeType::Circle, Vec2::new(4.0, 4.0)).unwrap();
/// engine.update(0.0, &mut store, &mut events);
///
/// assert_eq!(engine.num_collisions(), 1);
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CollisionAction {
    table: InstanceTable<Collider>,
    ignored: Vec<(i32, i32)>,
    collisions: Vec<Collision>,
    bodies: Vec<Body>,
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl CollisionAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `id` a collider sized by its texture dimensions
    pub fn attach(&mut self, store: &ChannelArray, id: ID, shape: ShapeType) -> WorldResult<()> {
        ensure_entity(store, id)?;
        let extent = store.get::<Texture>(id).dim;
        self.attach_with_extent(store, id, shape, extent)
    }

    /// Give `id` a collider of an explicit size (before scaling)
    pub fn attach_with_extent(
        &mut self,
        store: &ChannelArray,
        id: ID,
        shape: ShapeType,
        extent: Vec2,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        self.table.insert(id, Collider { shape, extent });
        Ok(())
    }

    /// Never report collisions between entities of types `a` and `b`
    pub fn ignore(&mut self, a: i32, b: i32) {
        let pair = ordered(a, b);
        if !self.ignored.contains(&pair) {
            self.ignored.push(pair);
        }
    }

    pub fn is_ignored(&self, a: i32, b: i32) -> bool {
        self.ignored.contains(&ordered(a, b))
    }

    /// Check whether the last update found any collision
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    pub fn num_collisions(&self) -> usize {
        self.collisions.len()
    }

    /// Collision `index` of the last update
    pub fn get_collision(&self, index: usize) -> Option<&Collision> {
        self.collisions.get(index)
    }

    /// All collisions of the last update
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

impl Action for CollisionAction {
    fn action_type(&self) -> ActionType {
        ActionType::Collision
    }

    fn name(&self) -> &str {
        "collision"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        self.collisions.clear();
        self.bodies.clear();

        let mut i = 0;
        while i < self.table.len() {
            let id = self.table.id(i);
            let (Some(position), Some(entity_type), Some(scale)) = (
                store.try_get::<Position>(id),
                store.try_get::<Type>(id),
                store.try_get::<Scale>(id),
            ) else {
                tracing::trace!(%id, "dropping collider for vanished entity");
                self.table.swap_remove(i);
                continue;
            };
            self.table.tick(i, dt);
            let c = *self.table.data(i);
            self.bodies.push(Body {
                id,
                entity_type,
                position,
                shape: c.shape,
                half: Vec2::new(c.extent.x * scale.x * 0.5, c.extent.y * scale.y * 0.5),
            });
            i += 1;
        }

        for (n, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[n + 1..] {
                if self.ignored.contains(&ordered(a.entity_type, b.entity_type)) {
                    continue;
                }
                if overlaps(a, b) {
                    self.collisions.push(Collision {
                        first: a.id,
                        first_type: a.entity_type,
                        first_position: a.position,
                        second: b.id,
                        second_type: b.entity_type,
                        second_position: b.position,
                    });
                    events.add(a.id, ActionType::Collision, a.entity_type);
                    events.add(b.id, ActionType::Collision, b.entity_type);
                }
            }
        }

        if !self.collisions.is_empty() {
            tracing::trace!(
                colliders = self.bodies.len(),
                pairs = self.collisions.len(),
                "collisions detected"
            );
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("Collision");
        writer.start_table(&["ID", "Shape", "Extent"]);
        for (id, _, c) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&c.shape);
            writer.add_cell(&c.extent);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}
