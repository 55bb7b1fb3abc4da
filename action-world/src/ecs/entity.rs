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
//! Entity identifiers
//!
//! An [`ID`] is a lightweight handle into the entity store. The index part
//! selects a slot in the store's sparse array, the generation part makes a
//! handle go stale the moment its entity is removed, even after the slot is
//! recycled for a new entity.

use std::fmt;

/// Stable handle to an entity in the [`ChannelArray`](crate::ecs::ChannelArray)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ID {
    index: u32,
    generation: u32,
}

/// Sentinel handle meaning "no entity"
pub const INVALID_ID: ID = ID {
    index: u32::MAX,
    generation: 0,
};

impl ID {
    /// Create a new handle from a slot index and generation
    pub fn new(index: u32, generation: u32) -> Self {
        ID { index, generation }
    }

    /// Get the slot index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the generation number
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Check whether this is the [`INVALID_ID`] sentinel
    pub fn is_invalid(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for ID {
    fn default() -> Self {
        INVALID_ID
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "ID(invalid)")
        } else {
            write!(f, "ID({}, gen: {})", self.index, self.generation)
        }
    }
}
