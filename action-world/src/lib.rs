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
//! # Action World
//!
//! An entity runtime for 2D games: entities live in a struct-of-arrays
//! store, and time-driven actions (movement, tweened scaling, color
//! flashes, delayed removal, collision detection and more) are advanced
//! once per tick by dedicated engines.
//!
//! ## Features
//!
//! - **Dense entity store**: one contiguous column per channel, stable
//!   generational handles, O(1) lookup and removal
//! - **Action engines**: one engine per kind of action, each with its own
//!   dense instance table and repeat-mode handling
//! - **Easing kernel**: the classic family of easing curves, selectable by a
//!   stable index from configuration data
//! - **Deferred events**: engines report completions into a buffer that the
//!   world drains only after every producer has run
//! - **Extensibility**: custom action engines and a behavior layer
//! - **Parallelization**: optional rayon support for the force passes
//!
//! ## Example
//!
//! ```rust
//! use action_world::ecs::World;
//! use action_world::ecs::channels::Scale;
//! use action_world::ecs::components::Vec3;
//! use action_world::tweening::Tweening;
//!
//! let mut world = World::new();
//! let id = world.create();
//! world
//!     .scale(id, Vec3::ONE, Vec3::splat(2.0), 1.0, 0, Tweening::Linear)
//!     .unwrap();
//!
//! world.tick(0.5);
//! assert_eq!(world.get::<Scale>(id), Vec3::splat(1.5));
//! ```

/// Action engines and their events
pub mod actions;

/// World configuration
pub mod config;

/// Entity store, scheduler and world
pub mod ecs;

/// Error types
pub mod error;

/// Name hashing and string interning
pub mod names;

/// Sampled paths for path-driven actions
pub mod path;

/// Custom action engine registry
pub mod plugins;

/// Diagnostic reports
pub mod report;

/// Entity templates
pub mod templates;

/// Easing functions
pub mod tweening;

pub use config::WorldConfig;
pub use ecs::{World, ID};
pub use error::{WorldError, WorldResult};
