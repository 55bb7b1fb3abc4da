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
//! Data-driven action attachments
//!
//! [`ActionSettings`] describes one attachment as plain data so actions can
//! be authored in configuration files and entity templates. Easing curves
//! are selected by their stable [`Tweening`] index; an unknown index falls
//! back to linear.
//!
//! ```
//! use action_world::actions::ActionSettings;
//!
//! let settings: ActionSettings = toml::from_str(
//!     r#"
//!     action = "scale"
//!     start = { x = 1.0, y = 1.0, z = 1.0 }
//!     end = { x = 2.0, y = 2.0, z = 1.0 }
//!     ttl = 0.5
//!     mode = -1
//!     tweening = 4
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.action_type().name(), "scale");
//! ```

use crate::actions::collision::ShapeType;
use crate::actions::scale_axes::Axis;
use crate::actions::ActionType;
use crate::ecs::channels::{self, Vec3Channel};
use crate::ecs::components::{Color, Vec3};
use crate::ecs::entity::ID;
use crate::ecs::scheduler::ActionManager;
use crate::ecs::storage::ChannelArray;
use crate::error::{WorldError, WorldResult};
use crate::tweening::Tweening;
use serde::{Deserialize, Serialize};

/// One action attachment described as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionSettings {
    MoveBy {
        velocity: Vec3,
        #[serde(default)]
        ttl: f32,
        #[serde(default)]
        bounce: bool,
    },
    /// Move along the entity's current heading
    MoveByRadial {
        speed: f32,
        #[serde(default)]
        ttl: f32,
        #[serde(default)]
        bounce: bool,
    },
    MoveTo {
        start: Vec3,
        end: Vec3,
        ttl: f32,
        #[serde(default)]
        tweening: i32,
    },
    Scale {
        #[serde(default)]
        channel: Vec3Channel,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        #[serde(default)]
        mode: i32,
        #[serde(default)]
        tweening: i32,
    },
    ScaleAxes {
        #[serde(default)]
        axis: Axis,
        start: f32,
        end: f32,
        ttl: f32,
        #[serde(default)]
        mode: i32,
        #[serde(default)]
        tweening: i32,
    },
    Rotate {
        velocity: Vec3,
        #[serde(default)]
        ttl: f32,
    },
    RotateBy {
        angle: f32,
        ttl: f32,
        #[serde(default)]
        tweening: i32,
    },
    ColorFlash {
        start: Color,
        end: Color,
        ttl: f32,
        #[serde(default)]
        mode: i32,
        #[serde(default)]
        tweening: i32,
    },
    AlphaFadeTo {
        /// Current alpha when omitted
        #[serde(default)]
        start: Option<f32>,
        end: f32,
        ttl: f32,
        #[serde(default)]
        tweening: i32,
    },
    RemoveAfter {
        ttl: f32,
    },
    Separate {
        entity_type: i32,
        min_distance: f32,
        #[serde(default = "default_relaxation")]
        relaxation: f32,
    },
    /// Collider sized by the entity's texture
    Collider {
        #[serde(default)]
        shape: ShapeType,
    },
}

fn default_relaxation() -> f32 {
    1.0
}

impl ActionSettings {
    /// Engine the settings attach to
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionSettings::MoveBy { .. } | ActionSettings::MoveByRadial { .. } => ActionType::MoveBy,
            ActionSettings::MoveTo { .. } => ActionType::MoveTo,
            ActionSettings::Scale { .. } => ActionType::Scale,
            ActionSettings::ScaleAxes { .. } => ActionType::ScaleAxes,
            ActionSettings::Rotate { .. } => ActionType::Rotate,
            ActionSettings::RotateBy { .. } => ActionType::RotateBy,
            ActionSettings::ColorFlash { .. } => ActionType::ColorFlash,
            ActionSettings::AlphaFadeTo { .. } => ActionType::AlphaFadeTo,
            ActionSettings::RemoveAfter { .. } => ActionType::RemoveAfter,
            ActionSettings::Separate { .. } => ActionType::Separate,
            ActionSettings::Collider { .. } => ActionType::Collision,
        }
    }

    /// Attach the described action to `id`
    ///
    /// # Errors
    ///
    /// Whatever the engine's attach returns, plus
    /// [`WorldError::CollisionsDisabled`] for a collider when the manager was
    /// built without collision support.
    pub fn apply(&self, actions: &mut ActionManager, store: &mut ChannelArray, id: ID) -> WorldResult<()> {
        match *self {
            ActionSettings::MoveBy {
                velocity,
                ttl,
                bounce,
            } => actions.move_by().attach(store, id, velocity, ttl, bounce),
            ActionSettings::MoveByRadial { speed, ttl, bounce } => {
                actions.move_by().attach_radial(store, id, speed, ttl, bounce)
            }
            ActionSettings::MoveTo {
                start,
                end,
                ttl,
                tweening,
            } => actions
                .move_to()
                .attach(store, id, start, end, ttl, Tweening::from_index(tweening)),
            ActionSettings::Scale {
                channel,
                start,
                end,
                ttl,
                mode,
                tweening,
            } => actions.scale().attach(
                store,
                id,
                channel,
                start,
                end,
                ttl,
                mode,
                Tweening::from_index(tweening),
            ),
            ActionSettings::ScaleAxes {
                axis,
                start,
                end,
                ttl,
                mode,
                tweening,
            } => actions.scale_axes().attach(
                store,
                id,
                axis,
                start,
                end,
                ttl,
                mode,
                Tweening::from_index(tweening),
            ),
            ActionSettings::Rotate { velocity, ttl } => actions.rotate().attach(store, id, velocity, ttl),
            ActionSettings::RotateBy {
                angle,
                ttl,
                tweening,
            } => actions
                .rotate_by()
                .attach(store, id, angle, ttl, Tweening::from_index(tweening)),
            ActionSettings::ColorFlash {
                start,
                end,
                ttl,
                mode,
                tweening,
            } => actions.color_flash().attach(
                store,
                id,
                start,
                end,
                ttl,
                mode,
                Tweening::from_index(tweening),
            ),
            ActionSettings::AlphaFadeTo {
                start,
                end,
                ttl,
                tweening,
            } => {
                let start = start.unwrap_or_else(|| store.try_get::<channels::Color>(id).map_or(1.0, |c| c.a));
                actions
                    .alpha_fade()
                    .attach(store, id, start, end, ttl, Tweening::from_index(tweening))
            }
            ActionSettings::RemoveAfter { ttl } => actions.remove_after().attach(store, id, ttl),
            ActionSettings::Separate {
                entity_type,
                min_distance,
                relaxation,
            } => actions
                .separate()
                .attach(store, id, entity_type, min_distance, relaxation),
            ActionSettings::Collider { shape } => actions
                .collision()
                .ok_or(WorldError::CollisionsDisabled)?
                .attach(store, id, shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::ecs::channels::Scale;
    use crate::ecs::components::Rect;

    #[test]
    fn test_parse_defaults() {
        let settings: ActionSettings = toml::from_str(
            r#"
            action = "move_by"
            velocity = { x = 1.0, y = 0.0, z = 0.0 }
            "#,
        )
        .unwrap();
        assert_eq!(
            settings,
            ActionSettings::MoveBy {
                velocity: Vec3::new(1.0, 0.0, 0.0),
                ttl: 0.0,
                bounce: false,
            }
        );
    }

    #[test]
    fn test_unknown_tweening_index_falls_back_to_linear() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut actions = ActionManager::new(Rect::default(), false);
        let settings = ActionSettings::Scale {
            channel: Vec3Channel::Scale,
            start: Vec3::ONE,
            end: Vec3::splat(3.0),
            ttl: 1.0,
            mode: 0,
            tweening: 99,
        };
        settings.apply(&mut actions, &mut store, id).unwrap();

        let mut events = crate::actions::ActionEventBuffer::new();
        actions.scale().update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Scale>(id), Vec3::splat(2.0));
    }

    #[test]
    fn test_alpha_fade_start_defaults_to_current_alpha() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<channels::Color>(id, Color::new(1.0, 1.0, 1.0, 0.5));
        let mut actions = ActionManager::new(Rect::default(), false);
        let settings: ActionSettings = toml::from_str(
            r#"
            action = "alpha_fade_to"
            end = 0.0
            ttl = 1.0
            "#,
        )
        .unwrap();
        settings.apply(&mut actions, &mut store, id).unwrap();

        let mut events = crate::actions::ActionEventBuffer::new();
        actions.alpha_fade().update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<channels::Color>(id).a, 0.25);
    }

    #[test]
    fn test_collider_requires_collision_support() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut actions = ActionManager::new(Rect::default(), false);
        let settings = ActionSettings::Collider {
            shape: ShapeType::Box,
        };
        assert_eq!(
            settings.apply(&mut actions, &mut store, id),
            Err(WorldError::CollisionsDisabled)
        );
    }
}
