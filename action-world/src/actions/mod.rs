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
//! Action engines
//!
//! An action is a time-driven behavior attached to an entity: move by a
//! velocity, tween a scale, fade a color, remove after a delay. Each kind of
//! action is handled by one engine that owns a dense table of instances and
//! advances all of them once per tick. Engines never touch each other; they
//! read and write the entity store and push completion events into the
//! shared [`ActionEventBuffer`].
//!
//! # Engine contract
//!
//! - `update` advances every instance by `dt` and writes the interpolated
//!   values into the store
//! - an instance whose entity vanished from the store is dropped silently
//! - a finished instance pushes exactly one event and is swap-removed
//! - `remove_by_id` drops every instance belonging to an entity

use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::report::ReportWriter;
use std::any::Any;
use std::fmt;

pub mod alpha_fade;
pub mod collision;
pub mod color_flash;
pub mod look_at;
pub mod move_by;
pub mod move_to;
pub mod remove_after;
pub mod repeat;
pub mod rotate;
pub mod rotate_by;
pub mod rotate_to_target;
pub mod scale;
pub mod scale_axes;
pub mod scale_by_path;
pub mod seek;
pub mod separate;
pub mod settings;
pub mod table;

pub use alpha_fade::AlphaFadeToAction;
pub use collision::{Collision, CollisionAction, ShapeType};
pub use color_flash::ColorFlashAction;
pub use look_at::LookAtAction;
pub use move_by::MoveByAction;
pub use move_to::MoveToAction;
pub use remove_after::RemoveAfterAction;
pub use rotate::RotateAction;
pub use rotate_by::RotateByAction;
pub use rotate_to_target::RotateToTargetAction;
pub use scale::ScalingAction;
pub use scale_axes::{Axis, ScaleAxesAction};
pub use scale_by_path::ScaleByPathAction;
pub use seek::SeekAction;
pub use separate::SeparateAction;
pub use settings::ActionSettings;
pub use table::InstanceTable;

/// Version of the engine API
///
/// Custom engines report the version they were written against through
/// [`Action::api_version`]. Registration rejects incompatible versions.
pub const ACTION_API_VERSION: &str = "0.1.0";

/// Kind of action an event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    MoveBy,
    MoveTo,
    Scale,
    ScaleAxes,
    ScaleByPath,
    Rotate,
    RotateBy,
    RotateToTarget,
    LookAt,
    Seek,
    Separate,
    ColorFlash,
    AlphaFadeTo,
    RemoveAfter,
    Collision,
    /// Request to remove the entity at the end of the tick
    Kill,
    /// Event raised by a registered custom engine, tagged by that engine
    Custom(u32),
}

impl ActionType {
    /// Order in which the scheduler runs the built-in engines
    ///
    /// Collision is not part of it: collision detection runs after force
    /// integration.
    pub const UPDATE_ORDER: [ActionType; 14] = [
        ActionType::MoveBy,
        ActionType::MoveTo,
        ActionType::Scale,
        ActionType::ScaleAxes,
        ActionType::ScaleByPath,
        ActionType::Rotate,
        ActionType::RotateBy,
        ActionType::RotateToTarget,
        ActionType::LookAt,
        ActionType::Seek,
        ActionType::Separate,
        ActionType::ColorFlash,
        ActionType::AlphaFadeTo,
        ActionType::RemoveAfter,
    ];

    /// Lowercase name used in reports and logs
    pub fn name(&self) -> &'static str {
        match self {
            ActionType::MoveBy => "move_by",
            ActionType::MoveTo => "move_to",
            ActionType::Scale => "scale",
            ActionType::ScaleAxes => "scale_axes",
            ActionType::ScaleByPath => "scale_by_path",
            ActionType::Rotate => "rotate",
            ActionType::RotateBy => "rotate_by",
            ActionType::RotateToTarget => "rotate_to_target",
            ActionType::LookAt => "look_at",
            ActionType::Seek => "seek",
            ActionType::Separate => "separate",
            ActionType::ColorFlash => "color_flash",
            ActionType::AlphaFadeTo => "alpha_fade_to",
            ActionType::RemoveAfter => "remove_after",
            ActionType::Collision => "collision",
            ActionType::Kill => "kill",
            ActionType::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Custom(tag) => write!(f, "custom({})", tag),
            other => f.write_str(other.name()),
        }
    }
}

/// Notification that an action finished or something happened to an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    /// Entity the event refers to
    pub id: ID,
    /// Engine that raised the event
    pub action: ActionType,
    /// Type tag of the entity at the time the event was raised
    pub entity_type: i32,
}

/// Per-tick list of [`ActionEvent`]s
///
/// The world clears the buffer at the start of every tick, so events are
/// visible until the next tick begins.
#[derive(Debug, Default)]
pub struct ActionEventBuffer {
    events: Vec<ActionEvent>,
}

impl ActionEventBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        ActionEventBuffer {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Append an event
    pub fn add(&mut self, id: ID, action: ActionType, entity_type: i32) {
        self.events.push(ActionEvent {
            id,
            action,
            entity_type,
        });
    }

    /// Drop all events, keeping the allocation
    pub fn reset(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<&ActionEvent> {
        self.events.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionEvent> {
        self.events.iter()
    }

    /// All events, in insertion order
    pub fn as_slice(&self) -> &[ActionEvent] {
        &self.events
    }

    /// Check whether an event of `action` was raised for `id`
    pub fn contains(&self, id: ID, action: ActionType) -> bool {
        self.events.iter().any(|e| e.id == id && e.action == action)
    }

    /// Move the events out so they can be processed while the world is
    /// mutated; hand them back with [`restore`](Self::restore)
    pub(crate) fn take(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn restore(&mut self, mut events: Vec<ActionEvent>) {
        // Anything pushed while the taken events were processed comes last
        events.append(&mut self.events);
        self.events = events;
    }
}

impl<'a> IntoIterator for &'a ActionEventBuffer {
    type Item = &'a ActionEvent;
    type IntoIter = std::slice::Iter<'a, ActionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// An engine driving every instance of one kind of action
///
/// Built-in engines are owned by the [`ActionManager`](crate::ecs::ActionManager);
/// custom engines are registered with the
/// [`ActionRegistry`](crate::plugins::ActionRegistry) and run right after the
/// built-in ones.
///
/// # Example
///
/// ```
/// use action_world::actions::{Action, ActionEventBuffer, ActionType};
/// use action_world::ecs::{ChannelArray, ID};
/// use std::any::Any;
///
/// /// Counts the ticks it has seen
/// struct TickCounter {
///     ticks: u32,
/// }
///
/// impl Action for TickCounter {
///     fn action_type(&self) -> ActionType {
///         ActionType::Custom(1)
///     }
///     fn name(&self) -> &str {
///         "tick_counter"
///     }
///     fn update(&mut self, _dt: f32, _store: &mut ChannelArray, _events: &mut ActionEventBuffer) {
///         self.ticks += 1;
///     }
///     fn remove_by_id(&mut self, _id: ID) -> bool {
///         false
///     }
///     fn contains(&self, _id: ID) -> bool {
///         false
///     }
///     fn len(&self) -> usize {
///         0
///     }
///     fn clear(&mut self) {}
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
/// }
/// ```
pub trait Action: Send {
    /// Kind of action, used to tag events and look the engine up
    fn action_type(&self) -> ActionType;

    /// Unique engine name
    fn name(&self) -> &str;

    /// Engine API version this engine was written against
    fn api_version(&self) -> &str {
        ACTION_API_VERSION
    }

    /// Advance every instance by `dt` seconds
    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer);

    /// Drop every instance attached to `id`; returns whether any was found
    fn remove_by_id(&mut self, id: ID) -> bool;

    /// Check whether an instance is attached to `id`
    fn contains(&self, id: ID) -> bool;

    /// Number of live instances
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all instances
    fn clear(&mut self);

    /// Write the live instances as a table
    fn save_report(&self, _writer: &mut dyn ReportWriter) {}

    /// Downcast support for typed access to registered engines
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implements the bookkeeping part of [`Action`] for engines that keep their
/// instances in an [`InstanceTable`] field
macro_rules! table_bookkeeping {
    ($field:ident) => {
        fn remove_by_id(&mut self, id: $crate::ecs::entity::ID) -> bool {
            self.$field.remove_by_id(id)
        }

        fn contains(&self, id: $crate::ecs::entity::ID) -> bool {
            self.$field.contains(id)
        }

        fn len(&self) -> usize {
            self.$field.len()
        }

        fn clear(&mut self) {
            self.$field.clear();
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}
pub(crate) use table_bookkeeping;

/// Make sure the entity exists before attaching an action to it
pub(crate) fn ensure_entity(store: &ChannelArray, id: ID) -> crate::error::WorldResult<()> {
    if store.contains(id) {
        Ok(())
    } else {
        Err(crate::error::WorldError::EntityNotFound(id))
    }
}

/// Reject non-finite or negative durations
pub(crate) fn ensure_duration(what: &str, ttl: f32) -> crate::error::WorldResult<()> {
    if ttl.is_finite() && ttl >= 0.0 {
        Ok(())
    } else {
        Err(crate::error::WorldError::InvalidParameter(format!(
            "{} duration must be a finite, non-negative number of seconds (got {})",
            what, ttl
        )))
    }
}

/// Reject non-finite durations for actions where `ttl <= 0` means run until stopped
pub(crate) fn ensure_open_duration(what: &str, ttl: f32) -> crate::error::WorldResult<()> {
    if ttl.is_finite() {
        Ok(())
    } else {
        Err(crate::error::WorldError::InvalidParameter(format!(
            "{} duration must be finite (got {})",
            what, ttl
        )))
    }
}
