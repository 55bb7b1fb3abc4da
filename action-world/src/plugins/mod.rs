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
//! Custom action engines
//!
//! Applications extend the world with their own engines by implementing
//! [`Action`](crate::actions::Action) and registering them with
//! [`World::register_action`](crate::ecs::World::register_action). Custom
//! engines follow the same contract as the built-in ones and run right
//! after them every tick; they are purged of removed entities the same way.

pub mod registry;

pub use registry::{is_version_compatible, ActionRegistry};
