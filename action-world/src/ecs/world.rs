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
//! The world: entity store, action engines and the tick that drives them
//!
//! # Tick
//!
//! [`World::tick`] runs, in this order:
//!
//! 1. clear the event buffer and reset every force accumulator
//! 2. run the built-in action engines, then the custom ones
//! 3. run the behavior layer's tick
//! 4. integrate: `position += force` for every entity
//! 5. run collision detection, if enabled
//! 6. drain the events: a [`ActionType::Kill`] event removes its entity
//!    (and every action attached to it), and every event is handed to the
//!    behavior layer
//!
//! Nothing removes an entity before step 6, so every producer in steps 2
//! to 5 sees the world as it was when the tick started.

use crate::actions::{
    Action, ActionEvent, ActionEventBuffer, ActionSettings, ActionType, Axis, Collision, ShapeType,
};
use crate::config::WorldConfig;
use crate::ecs::channels::{self, Channel, Vec3Channel};
use crate::ecs::components::{Color, Rect, Texture, Vec2, Vec3};
use crate::ecs::entity::ID;
use crate::ecs::scheduler::ActionManager;
use crate::ecs::storage::ChannelArray;
use crate::ecs::system::{Behaviors, NoBehaviors, WorldContext};
use crate::ecs::systems;
use crate::error::{WorldError, WorldResult};
use crate::names::{StaticHash, StringBuffer};
use crate::path::PathProvider;
use crate::plugins::ActionRegistry;
use crate::report::ReportWriter;
use crate::templates::EntityTemplates;
use crate::tweening::Tweening;
use std::sync::Arc;

/// Entities, their actions and the behavior layer
///
/// # Examples
///
/// ```
/// use action_world::actions::ActionType;
/// use action_world::ecs::channels::Position;
/// use action_world::ecs::components::Vec3;
/// use action_world::ecs::World;
///
/// let mut world = World::new();
/// let ship = world.create();
/// world.move_by(ship, Vec3::new(1.0, 0.0, 0.0), 2.0, false).unwrap();
///
/// for _ in 0..4 {
///     world.tick(0.5);
/// }
/// assert_eq!(world.get::<Position>(ship), Vec3::new(2.0, 0.0, 0.0));
/// assert!(world.events().iter().any(|e| e.id == ship && e.action == ActionType::MoveBy));
/// ```
pub struct World {
    data: ChannelArray,
    actions: ActionManager,
    custom: ActionRegistry,
    behaviors: Box<dyn Behaviors>,
    buffer: ActionEventBuffer,
    names: StringBuffer,
    templates: Option<EntityTemplates>,
    config: WorldConfig,
}

impl World {
    /// Create a world with the default configuration
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create a world from a configuration
    pub fn with_config(config: WorldConfig) -> Self {
        World {
            data: ChannelArray::with_capacity(config.initial_capacity),
            actions: ActionManager::new(config.bounding_rect, config.collisions),
            custom: ActionRegistry::new(),
            behaviors: Box::new(NoBehaviors),
            buffer: ActionEventBuffer::with_capacity(config.event_capacity),
            names: StringBuffer::new(),
            templates: None,
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    // ---- entities ----

    /// Create an entity with default channel values
    pub fn create(&mut self) -> ID {
        self.data.add()
    }

    /// Create an entity with explicit initial values
    ///
    /// `rotation` is the planar angle in radians. Force starts at zero and
    /// the entity has no name.
    pub fn create_with(
        &mut self,
        position: Vec3,
        texture: Texture,
        entity_type: i32,
        rotation: f32,
        scale: Vec3,
        color: Color,
    ) -> ID {
        let id = self.data.add();
        self.data.set::<channels::Position>(id, position);
        self.data.set::<channels::Texture>(id, texture);
        self.data.set::<channels::Type>(id, entity_type);
        self.data.set::<channels::Rotation>(id, Vec3::new(rotation, 0.0, 0.0));
        self.data.set::<channels::Scale>(id, scale);
        self.data.set::<channels::Color>(id, color);
        id
    }

    /// Create an entity from the template registered under `hash`
    ///
    /// The entity gets the template's name and every action the template
    /// lists.
    ///
    /// # Errors
    ///
    /// [`WorldError::TemplatesNotConfigured`] without a template table,
    /// [`WorldError::TemplateNotFound`] for an unknown hash, or the error of
    /// the first template action that fails to attach.
    pub fn create_from_template(&mut self, hash: StaticHash, position: Vec3) -> WorldResult<ID> {
        let templates = self
            .templates
            .as_ref()
            .ok_or(WorldError::TemplatesNotConfigured)?;
        let template = templates
            .find(hash)
            .ok_or(WorldError::TemplateNotFound(hash.get()))?
            .clone();

        let id = self.create_with(
            position,
            template.texture,
            template.entity_type,
            template.rotation,
            template.scale,
            template.color,
        );
        self.attach_name(id, &template.name)?;
        for settings in &template.actions {
            self.apply_settings(id, settings)?;
        }
        Ok(id)
    }

    /// Create an entity from a template looked up by name
    pub fn create_from_template_name(&mut self, name: &str, position: Vec3) -> WorldResult<ID> {
        self.create_from_template(StaticHash::new(name), position)
    }

    pub fn set_templates(&mut self, templates: EntityTemplates) {
        self.templates = Some(templates);
    }

    pub fn templates(&self) -> Option<&EntityTemplates> {
        self.templates.as_ref()
    }

    pub fn contains(&self, id: ID) -> bool {
        self.data.contains(id)
    }

    /// Read a channel value
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the world.
    #[track_caller]
    pub fn get<C: Channel>(&self, id: ID) -> C::Value {
        self.data.get::<C>(id)
    }

    /// Write a channel value
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the world.
    #[track_caller]
    pub fn set<C: Channel>(&mut self, id: ID, value: C::Value) {
        self.data.set::<C>(id, value);
    }

    pub fn try_get<C: Channel>(&self, id: ID) -> Option<C::Value> {
        self.data.try_get::<C>(id)
    }

    pub fn try_set<C: Channel>(&mut self, id: ID, value: C::Value) -> bool {
        self.data.try_set::<C>(id, value)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Handles of all live entities, in dense order
    pub fn ids(&self) -> &[ID] {
        self.data.ids()
    }

    pub fn store(&self) -> &ChannelArray {
        &self.data
    }

    /// Direct store access for batch work; bypasses the action cascade on
    /// removal
    pub fn store_mut(&mut self) -> &mut ChannelArray {
        &mut self.data
    }

    /// Remove an entity together with every action attached to it
    ///
    /// Removing an entity that is not part of the world logs a warning and
    /// returns `false`.
    pub fn remove(&mut self, id: ID) -> bool {
        if !self.data.remove(id) {
            return false;
        }
        self.actions.remove_by_id(id);
        self.custom.remove_by_id(id);
        true
    }

    /// Remove every entity of a type; returns how many were removed
    pub fn remove_by_type(&mut self, entity_type: i32) -> usize {
        let ids = self.data.find_by_type(entity_type);
        for id in &ids {
            self.remove(*id);
        }
        ids.len()
    }

    /// Remove every entity and action
    pub fn clear(&mut self) {
        self.data.clear();
        self.actions.clear();
        self.custom.clear();
        self.buffer.reset();
    }

    pub fn find_by_type(&self, entity_type: i32) -> Vec<ID> {
        self.data.find_by_type(entity_type)
    }

    /// First entity named `name`
    pub fn find_by_name(&self, name: &str) -> Option<ID> {
        let found = self.data.find_by_name(StaticHash::new(name));
        if found.is_none() {
            tracing::debug!(name, "no entity with this name");
        }
        found
    }

    /// Give an entity a name; the name is interned and its hash stored for
    /// lookups
    pub fn attach_name(&mut self, id: ID, name: &str) -> WorldResult<()> {
        if !self.data.contains(id) {
            return Err(WorldError::EntityNotFound(id));
        }
        let index = self.names.append(name);
        self.data.set::<channels::Name>(id, index as i32);
        self.data.set::<channels::Hash>(id, StaticHash::new(name));
        tracing::debug!(%id, name, "name attached");
        Ok(())
    }

    /// Name of an entity, `None` if it is unnamed or gone
    pub fn name_of(&self, id: ID) -> Option<&str> {
        let index = self.data.try_get::<channels::Name>(id)?;
        usize::try_from(index).ok().and_then(|i| self.names.get(i))
    }

    // ---- actions ----

    /// Move `id` by `velocity` units per second; a `ttl` of zero moves forever
    pub fn move_by(&mut self, id: ID, velocity: Vec3, ttl: f32, bounce: bool) -> WorldResult<()> {
        self.actions.move_by().attach(&mut self.data, id, velocity, ttl, bounce)
    }

    /// Move `id` at `speed` along its current heading
    pub fn move_by_radial(&mut self, id: ID, speed: f32, ttl: f32, bounce: bool) -> WorldResult<()> {
        self.actions
            .move_by()
            .attach_radial(&mut self.data, id, speed, ttl, bounce)
    }

    pub fn move_to(
        &mut self,
        id: ID,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.actions
            .move_to()
            .attach(&mut self.data, id, start, end, ttl, tweening)
    }

    /// Tween the scale of `id`
    pub fn scale(
        &mut self,
        id: ID,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.scale_channel(id, Vec3Channel::Scale, start, end, ttl, mode, tweening)
    }

    /// Tween any vector channel of `id`
    #[allow(clippy::too_many_arguments)]
    pub fn scale_channel(
        &mut self,
        id: ID,
        channel: Vec3Channel,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.actions
            .scale()
            .attach(&mut self.data, id, channel, start, end, ttl, mode, tweening)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scale_axes(
        &mut self,
        id: ID,
        axis: Axis,
        start: f32,
        end: f32,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.actions
            .scale_axes()
            .attach(&mut self.data, id, axis, start, end, ttl, mode, tweening)
    }

    pub fn scale_by_path(
        &mut self,
        id: ID,
        path: Arc<dyn PathProvider>,
        ttl: f32,
        mode: i32,
    ) -> WorldResult<()> {
        self.actions
            .scale_by_path()
            .attach(&mut self.data, id, path, ttl, mode)
    }

    /// Spin `id`; a `ttl` of zero spins forever
    pub fn rotate(&mut self, id: ID, velocity: Vec3, ttl: f32) -> WorldResult<()> {
        self.actions.rotate().attach(&self.data, id, velocity, ttl)
    }

    pub fn rotate_by(&mut self, id: ID, angle: f32, ttl: f32, tweening: Tweening) -> WorldResult<()> {
        self.actions
            .rotate_by()
            .attach(&self.data, id, angle, ttl, tweening)
    }

    pub fn rotate_to_target(&mut self, id: ID, target: ID, angular_velocity: f32) -> WorldResult<()> {
        self.actions
            .rotate_to_target()
            .attach(&self.data, id, target, angular_velocity)
    }

    pub fn look_at(&mut self, id: ID, target: ID, ttl: f32) -> WorldResult<()> {
        self.actions.look_at().attach(&mut self.data, id, target, ttl)
    }

    pub fn seek(&mut self, id: ID, target: ID, velocity: f32) -> WorldResult<()> {
        self.actions.seek().attach(&self.data, id, target, velocity)
    }

    pub fn separate(
        &mut self,
        id: ID,
        entity_type: i32,
        min_distance: f32,
        relaxation: f32,
    ) -> WorldResult<()> {
        self.actions
            .separate()
            .attach(&self.data, id, entity_type, min_distance, relaxation)
    }

    pub fn flash_color(
        &mut self,
        id: ID,
        start: Color,
        end: Color,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.actions
            .color_flash()
            .attach(&mut self.data, id, start, end, ttl, mode, tweening)
    }

    /// Fade the alpha of `id` from `start` to `end` over `ttl` seconds
    pub fn fade_alpha(
        &mut self,
        id: ID,
        start: f32,
        end: f32,
        ttl: f32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        self.actions
            .alpha_fade()
            .attach(&mut self.data, id, start, end, ttl, tweening)
    }

    /// Remove `id` once `ttl` seconds have passed
    pub fn remove_after(&mut self, id: ID, ttl: f32) -> WorldResult<()> {
        self.actions.remove_after().attach(&self.data, id, ttl)
    }

    /// Attach the action described by `settings`
    pub fn apply_settings(&mut self, id: ID, settings: &ActionSettings) -> WorldResult<()> {
        settings.apply(&mut self.actions, &mut self.data, id)
    }

    /// Cancel one action of an entity, leaving its other actions alone
    pub fn stop_action(&mut self, id: ID, action_type: ActionType) -> bool {
        match self.actions.get_mut(action_type) {
            Some(engine) => engine.remove_by_id(id),
            None => self.custom.stop_action(id, action_type),
        }
    }

    pub fn is_active(&self, id: ID, action_type: ActionType) -> bool {
        match self.actions.get(action_type) {
            Some(engine) => engine.contains(id),
            None => self.custom.is_active(id, action_type),
        }
    }

    pub fn actions(&self) -> &ActionManager {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionManager {
        &mut self.actions
    }

    pub fn bounding_rect(&self) -> Rect {
        self.actions.bounding_rect()
    }

    pub fn set_bounding_rect(&mut self, rect: Rect) {
        self.actions.set_bounding_rect(rect);
    }

    // ---- collisions ----

    /// Give `id` a collider sized by its texture
    pub fn attach_collider(&mut self, id: ID, shape: ShapeType) -> WorldResult<()> {
        let collision = self.actions.collision().ok_or(WorldError::CollisionsDisabled)?;
        collision.attach(&self.data, id, shape)
    }

    pub fn attach_collider_with_extent(&mut self, id: ID, shape: ShapeType, extent: Vec2) -> WorldResult<()> {
        let collision = self.actions.collision().ok_or(WorldError::CollisionsDisabled)?;
        collision.attach_with_extent(&self.data, id, shape, extent)
    }

    /// Never report collisions between types `a` and `b`
    pub fn ignore_collisions(&mut self, a: i32, b: i32) -> WorldResult<()> {
        let collision = self.actions.collision().ok_or(WorldError::CollisionsDisabled)?;
        collision.ignore(a, b);
        Ok(())
    }

    pub fn has_collisions(&self) -> bool {
        self.actions
            .collision_ref()
            .map_or(false, |c| c.has_collisions())
    }

    pub fn num_collisions(&self) -> usize {
        self.actions.collision_ref().map_or(0, |c| c.num_collisions())
    }

    pub fn get_collision(&self, index: usize) -> Option<&Collision> {
        self.actions.collision_ref()?.get_collision(index)
    }

    pub fn collisions(&self) -> &[Collision] {
        match self.actions.collision_ref() {
            Some(collision) => collision.collisions(),
            None => &[],
        }
    }

    // ---- custom engines and behaviors ----

    /// Register a custom engine; it runs after the built-in ones
    pub fn register_action(&mut self, engine: Box<dyn Action>) -> WorldResult<()> {
        self.custom.register(engine)
    }

    /// Registered custom engine of type `T`
    pub fn custom_action<T: Action + 'static>(&self) -> Option<&T> {
        self.custom.get::<T>()
    }

    pub fn custom_action_mut<T: Action + 'static>(&mut self) -> Option<&mut T> {
        self.custom.get_mut::<T>()
    }

    pub fn custom_actions(&self) -> &ActionRegistry {
        &self.custom
    }

    /// Replace the behavior layer
    pub fn set_behaviors<B: Behaviors + 'static>(&mut self, behaviors: B) {
        tracing::debug!(name = behaviors.name(), "behavior layer set");
        self.behaviors = Box::new(behaviors);
    }

    // ---- tick ----

    /// Advance the world by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.buffer.reset();
        systems::reset_forces(&mut self.data);

        self.actions.update(dt, &mut self.data, &mut self.buffer);
        self.custom.update_all(dt, &mut self.data, &mut self.buffer);
        {
            let mut ctx = WorldContext::new(&mut self.data, &mut self.actions);
            self.behaviors.tick(dt, &mut ctx);
        }

        systems::apply_forces(&mut self.data, self.config.warn_on_invalid_forces);
        self.actions.update_collisions(dt, &mut self.data, &mut self.buffer);

        self.drain_events();
    }

    fn drain_events(&mut self) {
        let events = self.buffer.take();
        for event in &events {
            // a second kill for the same entity is not worth a warning
            if event.action == ActionType::Kill && self.data.contains(event.id) {
                self.remove(event.id);
            }
            let mut ctx = WorldContext::new(&mut self.data, &mut self.actions);
            self.behaviors.process_event(event, &mut ctx);
        }
        self.buffer.restore(events);
    }

    /// Events of the last tick, in the order they were raised
    pub fn events(&self) -> &[ActionEvent] {
        self.buffer.as_slice()
    }

    // ---- diagnostics ----

    /// Dump every entity, then every engine with live instances
    pub fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("World");
        writer.start_table(&[
            "ID", "Index", "Position", "Texture", "Rotation", "Scale", "Color", "Type", "Force",
            "Name", "Hash",
        ]);
        for (row, id) in self.data.ids().iter().enumerate() {
            let rotation = self.data.get::<channels::Rotation>(*id).x.to_degrees();
            let name = self.name_of(*id).unwrap_or(StaticHash::NONE_TEXT);
            writer.start_row();
            writer.add_cell(id);
            writer.add_cell(&row);
            writer.add_cell(&self.data.get::<channels::Position>(*id));
            writer.add_cell(&self.data.get::<channels::Texture>(*id));
            writer.add_cell(&format!("{:.1}", rotation));
            writer.add_cell(&self.data.get::<channels::Scale>(*id));
            writer.add_cell(&self.data.get::<channels::Color>(*id));
            writer.add_cell(&self.data.get::<channels::Type>(*id));
            writer.add_cell(&self.data.get::<channels::Force>(*id));
            writer.add_cell(&name);
            writer.add_cell(&self.data.get::<channels::Hash>(*id));
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();

        self.actions.save_report(writer);
        self.custom.save_report(writer);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TextReport;
    use crate::templates::EntityTemplate;

    #[test]
    fn test_create_with_round_trip() {
        let mut world = World::new();
        let texture = Texture::new(4, 16.0, 8.0);
        let color = Color::new(0.5, 0.25, 1.0, 0.75);
        let id = world.create_with(Vec3::new(1.0, 2.0, 3.0), texture, 9, 0.5, Vec3::splat(2.0), color);

        assert_eq!(world.get::<channels::Position>(id), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(world.get::<channels::Texture>(id), texture);
        assert_eq!(world.get::<channels::Type>(id), 9);
        assert_eq!(world.get::<channels::Rotation>(id).x, 0.5);
        assert_eq!(world.get::<channels::Scale>(id), Vec3::splat(2.0));
        assert_eq!(world.get::<channels::Color>(id), color);
        assert_eq!(world.get::<channels::Force>(id), Vec3::ZERO);
        assert_eq!(world.name_of(id), None);
    }

    #[test]
    fn test_remove_cascades_to_actions() {
        let mut world = World::new();
        let id = world.create();
        world.rotate(id, Vec3::ONE, 0.0).unwrap();
        world.remove_after(id, 3.0).unwrap();
        assert_eq!(world.actions().active_count(), 2);

        assert!(world.remove(id));
        assert_eq!(world.actions().active_count(), 0);
        assert!(!world.remove(id));
    }

    #[test]
    fn test_names() {
        let mut world = World::new();
        let a = world.create();
        let b = world.create();
        world.attach_name(a, "player").unwrap();
        world.attach_name(b, "enemy").unwrap();

        assert_eq!(world.find_by_name("enemy"), Some(b));
        assert_eq!(world.name_of(a), Some("player"));
        assert_eq!(world.find_by_name("nobody"), None);
        assert!(world.attach_name(ID::new(99, 0), "ghost").is_err());
    }

    #[test]
    fn test_templates() {
        let mut world = World::new();
        assert_eq!(
            world.create_from_template_name("ship", Vec3::ZERO),
            Err(WorldError::TemplatesNotConfigured)
        );

        let mut templates = EntityTemplates::new();
        templates.add(
            EntityTemplate::new("ship", Texture::new(1, 10.0, 10.0), 3)
                .with_action(ActionSettings::RemoveAfter { ttl: 1.0 }),
        );
        world.set_templates(templates);

        let id = world
            .create_from_template_name("ship", Vec3::new(5.0, 5.0, 0.0))
            .unwrap();
        assert_eq!(world.get::<channels::Type>(id), 3);
        assert_eq!(world.name_of(id), Some("ship"));
        assert!(world.is_active(id, ActionType::RemoveAfter));
        assert!(matches!(
            world.create_from_template_name("tank", Vec3::ZERO),
            Err(WorldError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_kill_event_removes_entity_at_end_of_tick() {
        let mut world = World::new();
        let id = world.create();
        world.remove_after(id, 0.5).unwrap();

        world.tick(0.5);
        assert!(!world.contains(id));
        assert_eq!(world.events().len(), 1);
        assert_eq!(world.events()[0].action, ActionType::Kill);

        world.tick(0.5);
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_forces_are_integrated_and_reset() {
        let mut world = World::new();
        let hunter = world.create();
        let prey = world.create_with(
            Vec3::new(10.0, 0.0, 0.0),
            Texture::default(),
            0,
            0.0,
            Vec3::ONE,
            Color::WHITE,
        );
        world.seek(hunter, prey, 2.0).unwrap();

        world.tick(0.5);
        assert_eq!(world.get::<channels::Position>(hunter), Vec3::new(1.0, 0.0, 0.0));
        world.tick(0.5);
        assert_eq!(world.get::<channels::Position>(hunter), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_collisions_disabled() {
        let mut world = World::with_config(WorldConfig::default().with_collisions(false));
        let id = world.create();
        assert_eq!(
            world.attach_collider(id, ShapeType::Circle),
            Err(WorldError::CollisionsDisabled)
        );
        assert_eq!(world.ignore_collisions(1, 2), Err(WorldError::CollisionsDisabled));
        assert!(!world.has_collisions());
        assert!(world.collisions().is_empty());
    }

    #[test]
    fn test_stop_action() {
        let mut world = World::new();
        let id = world.create();
        world.rotate(id, Vec3::ONE, 0.0).unwrap();
        world.move_by(id, Vec3::ONE, 0.0, false).unwrap();

        assert!(world.stop_action(id, ActionType::Rotate));
        assert!(!world.is_active(id, ActionType::Rotate));
        assert!(world.is_active(id, ActionType::MoveBy));
        assert!(!world.stop_action(id, ActionType::Custom(3)));
    }

    #[test]
    fn test_report_lists_entities_and_engines() {
        let mut world = World::new();
        let id = world.create();
        world.attach_name(id, "crate").unwrap();
        world.remove_after(id, 2.0).unwrap();

        let mut report = TextReport::new();
        world.save_report(&mut report);
        assert!(report.as_str().contains("== World =="));
        assert!(report.as_str().contains("crate"));
        assert!(report.as_str().contains("== RemoveAfter =="));
        assert!(!report.as_str().contains("== MoveBy =="));
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        let id = world.create();
        world.rotate(id, Vec3::ONE, 0.0).unwrap();
        world.clear();
        assert!(world.is_empty());
        assert_eq!(world.actions().active_count(), 0);
        assert!(!world.contains(id));
    }
}
