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
//! Dense instance storage shared by the engines

use crate::ecs::entity::ID;

/// Dense table of action instances
///
/// Parallel arrays of owner IDs, elapsed timers and per-engine data. Removal
/// swaps the last instance into the hole, so an update loop that removes the
/// instance at `i` must revisit `i` instead of advancing.
///
/// An entity holds at most one instance per table: inserting for an ID that
/// already has one replaces it and restarts its timer.
#[derive(Debug, Clone)]
pub struct InstanceTable<T> {
    ids: Vec<ID>,
    timers: Vec<f32>,
    data: Vec<T>,
}

impl<T> InstanceTable<T> {
    pub fn new() -> Self {
        InstanceTable {
            ids: Vec::new(),
            timers: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Insert or replace the instance of `id`, returning its index
    pub fn insert(&mut self, id: ID, data: T) -> usize {
        if let Some(index) = self.find(id) {
            self.timers[index] = 0.0;
            self.data[index] = data;
            return index;
        }
        self.ids.push(id);
        self.timers.push(0.0);
        self.data.push(data);
        self.ids.len() - 1
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of the instance owned by `id`
    pub fn find(&self, id: ID) -> Option<usize> {
        self.ids.iter().position(|i| *i == id)
    }

    pub fn contains(&self, id: ID) -> bool {
        self.find(id).is_some()
    }

    /// Owner of the instance at `index`
    pub fn id(&self, index: usize) -> ID {
        self.ids[index]
    }

    /// Elapsed time of the instance at `index`
    pub fn timer(&self, index: usize) -> f32 {
        self.timers[index]
    }

    pub fn data(&self, index: usize) -> &T {
        &self.data[index]
    }

    pub fn data_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// Data of the instance owned by `id`
    pub fn get(&self, id: ID) -> Option<&T> {
        self.find(id).map(|index| &self.data[index])
    }

    pub fn get_mut(&mut self, id: ID) -> Option<&mut T> {
        self.find(id).map(move |index| &mut self.data[index])
    }

    /// Owner, timer and data of the instance at `index`, borrowed together
    pub fn entry_mut(&mut self, index: usize) -> (ID, &mut f32, &mut T) {
        (self.ids[index], &mut self.timers[index], &mut self.data[index])
    }

    /// Add `dt` to the timer at `index` and return the new elapsed time
    pub fn tick(&mut self, index: usize, dt: f32) -> f32 {
        self.timers[index] += dt;
        self.timers[index]
    }

    /// Remove the instance at `index`, moving the last one into its place
    pub fn swap_remove(&mut self, index: usize) -> (ID, T) {
        self.timers.swap_remove(index);
        (self.ids.swap_remove(index), self.data.swap_remove(index))
    }

    /// Remove the instance owned by `id`; returns whether one existed
    pub fn remove_by_id(&mut self, id: ID) -> bool {
        match self.find(id) {
            Some(index) => {
                self.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.timers.clear();
        self.data.clear();
    }

    /// Owner, timer and data of every instance, in table order
    pub fn iter(&self) -> impl Iterator<Item = (ID, f32, &T)> {
        self.ids
            .iter()
            .zip(self.timers.iter())
            .zip(self.data.iter())
            .map(|((id, timer), data)| (*id, *timer, data))
    }
}

impl<T> Default for InstanceTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
