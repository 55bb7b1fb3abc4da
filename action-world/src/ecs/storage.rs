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
//! Struct-of-arrays entity store
//!
//! [`ChannelArray`] keeps one contiguous column per channel. All columns
//! share the same dense row index, so a live entity always has a value in
//! every channel. A sparse array maps the slot part of an [`ID`] to its dense
//! row; removal swaps the last row into the hole and patches the moved
//! entity's sparse entry, keeping iteration dense without invalidating other
//! identifiers.
//!
//! # Memory Layout
//!
//! ```text
//! sparse:   [ 2, EMPTY, 0, 1 ]          slot -> dense row
//! ids:      [ID(2), ID(3), ID(0)]       dense row -> handle
//! position: [p2, p3, p0]
//! force:    [f2, f3, f0]
//! ...
//! ```

use crate::ecs::channels::{Channel, Vec3Channel};
use crate::ecs::components::{Color, Texture, Vec3};
use crate::ecs::entity::ID;
use crate::names::StaticHash;

/// Marker for an unused sparse slot
const EMPTY: usize = usize::MAX;

/// Capacity used when the store is created with zero capacity and then grows
const MIN_GROWTH: usize = 16;

/// The raw channel columns, all of identical length
///
/// Only reachable through [`Channel`] markers and [`ChannelArray`].
#[derive(Debug, Default)]
pub struct ChannelColumns {
    pub(crate) position: Vec<Vec3>,
    pub(crate) rotation: Vec<Vec3>,
    pub(crate) scale: Vec<Vec3>,
    pub(crate) texture: Vec<Texture>,
    pub(crate) color: Vec<Color>,
    pub(crate) entity_type: Vec<i32>,
    pub(crate) force: Vec<Vec3>,
    pub(crate) name: Vec<i32>,
    pub(crate) hash: Vec<StaticHash>,
}

impl ChannelColumns {
    fn reserve_exact(&mut self, additional: usize) {
        self.position.reserve_exact(additional);
        self.rotation.reserve_exact(additional);
        self.scale.reserve_exact(additional);
        self.texture.reserve_exact(additional);
        self.color.reserve_exact(additional);
        self.entity_type.reserve_exact(additional);
        self.force.reserve_exact(additional);
        self.name.reserve_exact(additional);
        self.hash.reserve_exact(additional);
    }

    fn push_defaults(&mut self, unnamed: StaticHash) {
        self.position.push(Vec3::ZERO);
        self.rotation.push(Vec3::ZERO);
        self.scale.push(Vec3::ONE);
        self.texture.push(Texture::default());
        self.color.push(Color::WHITE);
        self.entity_type.push(0);
        self.force.push(Vec3::ZERO);
        self.name.push(-1);
        self.hash.push(unnamed);
    }

    fn swap_remove(&mut self, row: usize) {
        self.position.swap_remove(row);
        self.rotation.swap_remove(row);
        self.scale.swap_remove(row);
        self.texture.swap_remove(row);
        self.color.swap_remove(row);
        self.entity_type.swap_remove(row);
        self.force.swap_remove(row);
        self.name.swap_remove(row);
        self.hash.swap_remove(row);
    }

    fn clear(&mut self) {
        self.position.clear();
        self.rotation.clear();
        self.scale.clear();
        self.texture.clear();
        self.color.clear();
        self.entity_type.clear();
        self.force.clear();
        self.name.clear();
        self.hash.clear();
    }

    fn lengths_match(&self, len: usize) -> bool {
        self.position.len() == len
            && self.rotation.len() == len
            && self.scale.len() == len
            && self.texture.len() == len
            && self.color.len() == len
            && self.entity_type.len() == len
            && self.force.len() == len
            && self.name.len() == len
            && self.hash.len() == len
    }
}

/// Multi-channel entity store addressed by stable [`ID`]s
///
/// # Examples
///
/// ```
/// use action_world::ecs::{channels, ChannelArray};
/// use action_world::ecs::components::Vec3;
///
/// let mut store = ChannelArray::new();
/// let a = store.add();
/// let b = store.add();
/// store.set::<channels::Position>(a, Vec3::new(5.0, 0.0, 0.0));
///
/// store.remove(b);
/// assert!(store.contains(a));
/// assert!(!store.contains(b));
/// assert_eq!(store.get::<channels::Position>(a).x, 5.0);
/// ```
#[derive(Debug)]
pub struct ChannelArray {
    columns: ChannelColumns,
    /// Dense row -> handle
    ids: Vec<ID>,
    /// Slot -> dense row, sized to `capacity`
    sparse: Vec<usize>,
    /// Slot -> current generation
    generations: Vec<u32>,
    /// Recycled slots
    free: Vec<u32>,
    /// Next never-used slot
    next_slot: u32,
    capacity: usize,
    unnamed: StaticHash,
}

impl ChannelArray {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        let mut columns = ChannelColumns::default();
        columns.reserve_exact(capacity);
        ChannelArray {
            columns,
            ids: Vec::with_capacity(capacity),
            sparse: vec![EMPTY; capacity],
            generations: vec![0; capacity],
            free: Vec::new(),
            next_slot: 0,
            capacity,
            unnamed: StaticHash::none(),
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of slots available before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Allocate a new entity with every channel set to its default
    ///
    /// Defaults: zero position/rotation/force, unit scale, white color,
    /// type 0, no name.
    pub fn add(&mut self) -> ID {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                if self.next_slot as usize >= self.capacity {
                    self.grow();
                }
                let slot = self.next_slot;
                self.next_slot += 1;
                slot
            }
        };

        let row = self.ids.len();
        let id = ID::new(slot, self.generations[slot as usize]);
        self.sparse[slot as usize] = row;
        self.ids.push(id);
        self.columns.push_defaults(self.unnamed);

        debug_assert!(self.columns.lengths_match(self.ids.len()));
        id
    }

    /// Double the capacity, reallocating every column in lockstep
    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(MIN_GROWTH);
        let additional = new_capacity - self.ids.len();
        self.columns.reserve_exact(additional);
        self.ids.reserve_exact(additional);
        self.sparse.resize(new_capacity, EMPTY);
        self.generations.resize(new_capacity, 0);
        tracing::debug!(
            old = self.capacity,
            new = new_capacity,
            "entity store grown"
        );
        self.capacity = new_capacity;
    }

    /// Check whether `id` names a live entity
    pub fn contains(&self, id: ID) -> bool {
        self.dense_index(id).is_some()
    }

    /// Dense row of a live entity
    pub fn dense_index(&self, id: ID) -> Option<usize> {
        let slot = id.index() as usize;
        if slot >= self.sparse.len() || self.generations[slot] != id.generation() {
            return None;
        }
        match self.sparse[slot] {
            EMPTY => None,
            row => Some(row),
        }
    }

    /// Read a channel value
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the store. Use [`try_get`](Self::try_get)
    /// when absence is an expected condition.
    #[track_caller]
    pub fn get<C: Channel>(&self, id: ID) -> C::Value {
        match self.try_get::<C>(id) {
            Some(value) => value,
            None => panic!("{} is not part of the world (reading {})", id, C::ID),
        }
    }

    /// Write a channel value
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the store.
    #[track_caller]
    pub fn set<C: Channel>(&mut self, id: ID, value: C::Value) {
        if !self.try_set::<C>(id, value) {
            panic!("{} is not part of the world (writing {})", id, C::ID);
        }
    }

    /// Read a channel value, `None` if `id` is absent
    pub fn try_get<C: Channel>(&self, id: ID) -> Option<C::Value> {
        let row = self.dense_index(id)?;
        Some(C::column(&self.columns)[row])
    }

    /// Write a channel value, returning `false` if `id` is absent
    pub fn try_set<C: Channel>(&mut self, id: ID, value: C::Value) -> bool {
        match self.dense_index(id) {
            Some(row) => {
                C::column_mut(&mut self.columns)[row] = value;
                true
            }
            None => false,
        }
    }

    /// Read a vector channel selected at runtime, `None` if `id` is absent
    pub fn try_get_vec3(&self, id: ID, channel: Vec3Channel) -> Option<Vec3> {
        let row = self.dense_index(id)?;
        Some(channel.column(&self.columns)[row])
    }

    /// Write a vector channel selected at runtime, `false` if `id` is absent
    pub fn try_set_vec3(&mut self, id: ID, channel: Vec3Channel, value: Vec3) -> bool {
        match self.dense_index(id) {
            Some(row) => {
                channel.column_mut(&mut self.columns)[row] = value;
                true
            }
            None => false,
        }
    }

    /// Remove an entity
    ///
    /// Removing an absent identifier is a reported, non-fatal condition:
    /// it logs a warning and returns `false`.
    pub fn remove(&mut self, id: ID) -> bool {
        let row = match self.dense_index(id) {
            Some(row) => row,
            None => {
                tracing::warn!(%id, "requested to remove an entity that is not part of the world");
                return false;
            }
        };

        let last = self.ids.len() - 1;
        self.columns.swap_remove(row);
        self.ids.swap_remove(row);
        if row != last {
            let moved = self.ids[row];
            self.sparse[moved.index() as usize] = row;
        }

        let slot = id.index() as usize;
        self.sparse[slot] = EMPTY;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free.push(id.index());

        debug_assert!(self.columns.lengths_match(self.ids.len()));
        true
    }

    /// Remove every entity; outstanding handles become stale
    pub fn clear(&mut self) {
        for id in self.ids.drain(..) {
            let slot = id.index() as usize;
            self.sparse[slot] = EMPTY;
            self.generations[slot] = self.generations[slot].wrapping_add(1);
            self.free.push(id.index());
        }
        self.columns.clear();
    }

    /// Handles of all live entities in dense order
    pub fn ids(&self) -> &[ID] {
        &self.ids
    }

    /// Dense column of a channel, indexed by dense row
    pub fn column<C: Channel>(&self) -> &[C::Value] {
        C::column(&self.columns)
    }

    /// Mutable dense column of a channel, for batch passes
    pub fn column_mut<C: Channel>(&mut self) -> &mut [C::Value] {
        C::column_mut(&mut self.columns)
    }

    /// Positions (mutable) and forces (shared) together, for force integration
    pub fn positions_and_forces_mut(&mut self) -> (&mut [Vec3], &[Vec3]) {
        (
            self.columns.position.as_mut_slice(),
            self.columns.force.as_slice(),
        )
    }

    /// All live entities with the given type tag, in dense order
    pub fn find_by_type(&self, entity_type: i32) -> Vec<ID> {
        self.ids
            .iter()
            .zip(self.columns.entity_type.iter())
            .filter(|(_, t)| **t == entity_type)
            .map(|(id, _)| *id)
            .collect()
    }

    /// First live entity whose name hash equals `hash`
    pub fn find_by_name(&self, hash: StaticHash) -> Option<ID> {
        self.ids
            .iter()
            .zip(self.columns.hash.iter())
            .find(|(_, h)| **h == hash)
            .map(|(id, _)| *id)
    }
}

impl Default for ChannelArray {
    fn default() -> Self {
        Self::new()
    }
}
