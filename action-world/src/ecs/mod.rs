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
//! Entity store and tick orchestration
//!
//! This module provides:
//! - Generational entity handles ([`ID`])
//! - A struct-of-arrays store with one column per channel ([`ChannelArray`])
//! - The action scheduler ([`ActionManager`])
//! - The behavior layer boundary ([`Behaviors`], [`WorldContext`])
//! - The [`World`] that ties them together

pub mod channels;
pub mod components;
pub mod entity;
pub mod scheduler;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

pub use entity::{ID, INVALID_ID};
pub use scheduler::ActionManager;
pub use storage::ChannelArray;
pub use system::{BehaviorSet, Behaviors, NoBehaviors, WorldContext};
pub use world::World;
