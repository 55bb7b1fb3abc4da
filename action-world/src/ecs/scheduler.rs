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
//! Action scheduler
//!
//! [`ActionManager`] owns one instance of every built-in engine and runs them
//! in the fixed order of [`ActionType::UPDATE_ORDER`]. The collision engine
//! is optional and runs separately, after force integration, through
//! [`ActionManager::update_collisions`].

use crate::actions::{
    Action, ActionEventBuffer, ActionType, AlphaFadeToAction, CollisionAction, ColorFlashAction,
    LookAtAction, MoveByAction, MoveToAction, RemoveAfterAction, RotateAction, RotateByAction,
    RotateToTargetAction, ScaleAxesAction, ScaleByPathAction, ScalingAction, SeekAction,
    SeparateAction,
};
use crate::ecs::components::Rect;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::report::ReportWriter;

/// Holds and drives every built-in action engine
///
/// # Examples
///
/// ```
/// use action_world::actions::{ActionEventBuffer, ActionType};
/// use action_world::ecs::components::{Rect, Vec3};
/// use action_world::ecs::{ActionManager, ChannelArray};
///
/// let mut store = ChannelArray::new();
/// let id = store.add();
/// let mut actions = ActionManager::new(Rect::new(0.0, 0.0, 100.0, 100.0), false);
/// let mut events = ActionEventBuffer::new();
///
/// actions.rotate().attach(&store, id, Vec3::new(1.0, 0.0, 0.0), 0.0).unwrap();
/// assert!(actions.is_active(id, ActionType::Rotate));
///
/// actions.update(0.5, &mut store, &mut events);
/// assert!(actions.stop_action(id, ActionType::Rotate));
/// assert!(!actions.is_active(id, ActionType::Rotate));
/// ```
#[derive(Debug)]
pub struct ActionManager {
    move_by: MoveByAction,
    move_to: MoveToAction,
    scale: ScalingAction,
    scale_axes: ScaleAxesAction,
    scale_by_path: ScaleByPathAction,
    rotate: RotateAction,
    rotate_by: RotateByAction,
    rotate_to_target: RotateToTargetAction,
    look_at: LookAtAction,
    seek: SeekAction,
    separate: SeparateAction,
    color_flash: ColorFlashAction,
    alpha_fade: AlphaFadeToAction,
    remove_after: RemoveAfterAction,
    collision: Option<CollisionAction>,
    bounding_rect: Rect,
}

impl ActionManager {
    /// Create a manager with all engines empty
    ///
    /// The collision engine only exists when `collisions` is set.
    pub fn new(bounding_rect: Rect, collisions: bool) -> Self {
        ActionManager {
            move_by: MoveByAction::new(bounding_rect),
            move_to: MoveToAction::new(),
            scale: ScalingAction::new(),
            scale_axes: ScaleAxesAction::new(),
            scale_by_path: ScaleByPathAction::new(),
            rotate: RotateAction::new(),
            rotate_by: RotateByAction::new(),
            rotate_to_target: RotateToTargetAction::new(),
            look_at: LookAtAction::new(),
            seek: SeekAction::new(),
            separate: SeparateAction::new(),
            color_flash: ColorFlashAction::new(),
            alpha_fade: AlphaFadeToAction::new(),
            remove_after: RemoveAfterAction::new(),
            collision: collisions.then(CollisionAction::new),
            bounding_rect,
        }
    }

    /// Run every built-in engine except collision, in [`ActionType::UPDATE_ORDER`]
    pub fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        for engine in self.engines_mut() {
            engine.update(dt, store, events);
        }
    }

    /// Run collision detection; a no-op without collision support
    pub fn update_collisions(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        if let Some(collision) = self.collision.as_mut() {
            collision.update(dt, store, events);
        }
    }

    fn engines(&self) -> [&dyn Action; 14] {
        [
            &self.move_by,
            &self.move_to,
            &self.scale,
            &self.scale_axes,
            &self.scale_by_path,
            &self.rotate,
            &self.rotate_by,
            &self.rotate_to_target,
            &self.look_at,
            &self.seek,
            &self.separate,
            &self.color_flash,
            &self.alpha_fade,
            &self.remove_after,
        ]
    }

    fn engines_mut(&mut self) -> [&mut dyn Action; 14] {
        [
            &mut self.move_by,
            &mut self.move_to,
            &mut self.scale,
            &mut self.scale_axes,
            &mut self.scale_by_path,
            &mut self.rotate,
            &mut self.rotate_by,
            &mut self.rotate_to_target,
            &mut self.look_at,
            &mut self.seek,
            &mut self.separate,
            &mut self.color_flash,
            &mut self.alpha_fade,
            &mut self.remove_after,
        ]
    }

    /// Engine handling `action_type`
    ///
    /// `None` for [`ActionType::Kill`], custom types, and collision when
    /// collision support is off.
    pub fn get(&self, action_type: ActionType) -> Option<&dyn Action> {
        let engine: &dyn Action = match action_type {
            ActionType::MoveBy => &self.move_by,
            ActionType::MoveTo => &self.move_to,
            ActionType::Scale => &self.scale,
            ActionType::ScaleAxes => &self.scale_axes,
            ActionType::ScaleByPath => &self.scale_by_path,
            ActionType::Rotate => &self.rotate,
            ActionType::RotateBy => &self.rotate_by,
            ActionType::RotateToTarget => &self.rotate_to_target,
            ActionType::LookAt => &self.look_at,
            ActionType::Seek => &self.seek,
            ActionType::Separate => &self.separate,
            ActionType::ColorFlash => &self.color_flash,
            ActionType::AlphaFadeTo => &self.alpha_fade,
            ActionType::RemoveAfter => &self.remove_after,
            ActionType::Collision => return self.collision.as_ref().map(|c| c as &dyn Action),
            ActionType::Kill | ActionType::Custom(_) => return None,
        };
        Some(engine)
    }

    /// Mutable form of [`get`](Self::get)
    pub fn get_mut(&mut self, action_type: ActionType) -> Option<&mut dyn Action> {
        let engine: &mut dyn Action = match action_type {
            ActionType::MoveBy => &mut self.move_by,
            ActionType::MoveTo => &mut self.move_to,
            ActionType::Scale => &mut self.scale,
            ActionType::ScaleAxes => &mut self.scale_axes,
            ActionType::ScaleByPath => &mut self.scale_by_path,
            ActionType::Rotate => &mut self.rotate,
            ActionType::RotateBy => &mut self.rotate_by,
            ActionType::RotateToTarget => &mut self.rotate_to_target,
            ActionType::LookAt => &mut self.look_at,
            ActionType::Seek => &mut self.seek,
            ActionType::Separate => &mut self.separate,
            ActionType::ColorFlash => &mut self.color_flash,
            ActionType::AlphaFadeTo => &mut self.alpha_fade,
            ActionType::RemoveAfter => &mut self.remove_after,
            ActionType::Collision => {
                return self.collision.as_mut().map(|c| c as &mut dyn Action)
            }
            ActionType::Kill | ActionType::Custom(_) => return None,
        };
        Some(engine)
    }

    pub fn move_by(&mut self) -> &mut MoveByAction {
        &mut self.move_by
    }

    pub fn move_to(&mut self) -> &mut MoveToAction {
        &mut self.move_to
    }

    pub fn scale(&mut self) -> &mut ScalingAction {
        &mut self.scale
    }

    pub fn scale_axes(&mut self) -> &mut ScaleAxesAction {
        &mut self.scale_axes
    }

    pub fn scale_by_path(&mut self) -> &mut ScaleByPathAction {
        &mut self.scale_by_path
    }

    pub fn rotate(&mut self) -> &mut RotateAction {
        &mut self.rotate
    }

    pub fn rotate_by(&mut self) -> &mut RotateByAction {
        &mut self.rotate_by
    }

    pub fn rotate_to_target(&mut self) -> &mut RotateToTargetAction {
        &mut self.rotate_to_target
    }

    pub fn look_at(&mut self) -> &mut LookAtAction {
        &mut self.look_at
    }

    pub fn seek(&mut self) -> &mut SeekAction {
        &mut self.seek
    }

    pub fn separate(&mut self) -> &mut SeparateAction {
        &mut self.separate
    }

    pub fn color_flash(&mut self) -> &mut ColorFlashAction {
        &mut self.color_flash
    }

    pub fn alpha_fade(&mut self) -> &mut AlphaFadeToAction {
        &mut self.alpha_fade
    }

    pub fn remove_after(&mut self) -> &mut RemoveAfterAction {
        &mut self.remove_after
    }

    /// Collision engine, `None` without collision support
    pub fn collision(&mut self) -> Option<&mut CollisionAction> {
        self.collision.as_mut()
    }

    /// Shared form of [`collision`](Self::collision)
    pub fn collision_ref(&self) -> Option<&CollisionAction> {
        self.collision.as_ref()
    }

    pub fn supports_collisions(&self) -> bool {
        self.collision.is_some()
    }

    /// Drop every instance attached to `id`, in every engine
    pub fn remove_by_id(&mut self, id: ID) {
        for engine in self.engines_mut() {
            engine.remove_by_id(id);
        }
        if let Some(collision) = self.collision.as_mut() {
            collision.remove_by_id(id);
        }
    }

    /// Cancel the `action_type` instance of `id`, leaving its other actions
    /// running; returns whether one was active
    pub fn stop_action(&mut self, id: ID, action_type: ActionType) -> bool {
        self.get_mut(action_type)
            .map_or(false, |engine| engine.remove_by_id(id))
    }

    /// Check whether `id` has a live `action_type` instance
    pub fn is_active(&self, id: ID, action_type: ActionType) -> bool {
        self.get(action_type)
            .map_or(false, |engine| engine.contains(id))
    }

    /// Total number of live instances over all engines
    pub fn active_count(&self) -> usize {
        let builtin: usize = self.engines().iter().map(|e| e.len()).sum();
        builtin + self.collision.as_ref().map_or(0, |c| c.len())
    }

    /// World rectangle used by bouncing movement
    pub fn bounding_rect(&self) -> Rect {
        self.bounding_rect
    }

    pub fn set_bounding_rect(&mut self, rect: Rect) {
        self.bounding_rect = rect;
        self.move_by.set_bounds(rect);
    }

    /// Drop every instance of every engine
    pub fn clear(&mut self) {
        for engine in self.engines_mut() {
            engine.clear();
        }
        if let Some(collision) = self.collision.as_mut() {
            collision.clear();
        }
    }

    /// Report every engine that has live instances
    pub fn save_report(&self, writer: &mut dyn ReportWriter) {
        for engine in self.engines() {
            if !engine.is_empty() {
                engine.save_report(writer);
            }
        }
        if let Some(collision) = self.collision.as_ref().filter(|c| !c.is_empty()) {
            collision.save_report(writer);
        }
    }
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new(Rect::default(), true)
    }
}
