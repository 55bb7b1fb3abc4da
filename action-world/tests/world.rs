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
//! End-to-end world scenarios: tick ordering, deferred removal, behaviors
//! and custom engines

use std::any::Any;
use std::sync::{Arc, Mutex};

use action_world::actions::{Action, ActionEvent, ActionEventBuffer, ActionType, ShapeType};
use action_world::config::WorldConfig;
use action_world::ecs::channels::{Position, Scale, Type};
use action_world::ecs::components::{Color, Texture, Vec3};
use action_world::ecs::{Behaviors, ChannelArray, World, WorldContext, ID};
use action_world::templates::EntityTemplates;
use action_world::tweening::Tweening;
use action_world::WorldError;

#[test]
fn test_move_by_scenario() {
    let mut world = World::new();
    let id = world.create();
    world.move_by(id, Vec3::new(1.0, 0.0, 0.0), 2.0, false).unwrap();

    for tick in 1..=4 {
        world.tick(0.5);
        let finished = world
            .events()
            .iter()
            .any(|e| e.id == id && e.action == ActionType::MoveBy);
        assert_eq!(finished, tick == 4, "unexpected event state on tick {tick}");
    }

    let position = world.get::<Position>(id);
    assert!((position.x - 2.0).abs() < 1e-5);
    assert_eq!(position.y, 0.0);
    assert!(!world.is_active(id, ActionType::MoveBy));
}

#[test]
fn test_remove_during_scale() {
    let mut world = World::new();
    let doomed = world.create();
    let other = world.create();
    world
        .scale(doomed, Vec3::ONE, Vec3::splat(2.0), 0.5, 0, Tweening::Linear)
        .unwrap();
    world
        .scale(other, Vec3::ONE, Vec3::splat(2.0), 0.5, 0, Tweening::Linear)
        .unwrap();

    world.tick(0.25);
    assert!(world.remove(doomed));
    assert!(!world.is_active(doomed, ActionType::Scale));

    world.tick(0.25);
    assert!(world.events().iter().all(|e| e.id != doomed));
    assert!(world
        .events()
        .iter()
        .any(|e| e.id == other && e.action == ActionType::Scale));
    assert_eq!(world.get::<Scale>(other), Vec3::splat(2.0));
}

#[test]
fn test_remove_missing_entity_is_not_fatal() {
    let mut world = World::new();
    let id = world.create();
    assert!(world.remove(id));
    assert!(!world.remove(id));
    world.tick(0.1);
}

/// Records every event it is handed
#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<ActionEvent>>>,
}

impl Behaviors for Recorder {
    fn process_event(&mut self, event: &ActionEvent, ctx: &mut WorldContext<'_>) {
        assert_eq!(
            ctx.store.contains(event.id),
            event.action != ActionType::Kill,
            "removals must be resolved before behaviors run"
        );
        self.seen.lock().unwrap().push(*event);
    }
}

#[test]
fn test_behaviors_see_events_after_removal() {
    let mut world = World::new();
    let recorder = Recorder::default();
    world.set_behaviors(recorder.clone());

    let id = world.create();
    world.set::<Type>(id, 5);
    world.remove_after(id, 0.5).unwrap();
    world.tick(0.5);

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, id);
    assert_eq!(seen[0].action, ActionType::Kill);
    assert_eq!(seen[0].entity_type, 5);
    assert!(!world.contains(id));
}

#[test]
fn test_collisions_reach_behaviors() {
    let mut world = World::new();
    let recorder = Recorder::default();
    world.set_behaviors(recorder.clone());

    let texture = Texture::new(0, 10.0, 10.0);
    let a = world.create_with(Vec3::ZERO, texture, 1, 0.0, Vec3::ONE, Color::WHITE);
    let b = world.create_with(Vec3::new(8.0, 0.0, 0.0), texture, 2, 0.0, Vec3::ONE, Color::WHITE);
    let far = world.create_with(Vec3::new(500.0, 0.0, 0.0), texture, 2, 0.0, Vec3::ONE, Color::WHITE);
    for id in [a, b, far] {
        world.attach_collider(id, ShapeType::Circle).unwrap();
    }

    world.tick(0.1);
    assert_eq!(world.num_collisions(), 1);
    let collision = world.get_collision(0).unwrap();
    assert!(collision.is_between(1, 2));

    let seen = recorder.seen.lock().unwrap();
    let hit: Vec<ID> = seen.iter().map(|e| e.id).collect();
    assert_eq!(hit.len(), 2);
    assert!(hit.contains(&a) && hit.contains(&b));
}

#[test]
fn test_ignored_pairs_do_not_collide() {
    let mut world = World::new();
    let texture = Texture::new(0, 10.0, 10.0);
    let a = world.create_with(Vec3::ZERO, texture, 1, 0.0, Vec3::ONE, Color::WHITE);
    let b = world.create_with(Vec3::new(2.0, 0.0, 0.0), texture, 1, 0.0, Vec3::ONE, Color::WHITE);
    world.attach_collider(a, ShapeType::Box).unwrap();
    world.attach_collider(b, ShapeType::Box).unwrap();
    world.ignore_collisions(1, 1).unwrap();

    world.tick(0.1);
    assert!(!world.has_collisions());
}

#[test]
fn test_collisions_can_be_disabled() {
    let mut world = World::with_config(WorldConfig::default().with_collisions(false));
    let id = world.create();
    assert_eq!(
        world.attach_collider(id, ShapeType::Circle),
        Err(WorldError::CollisionsDisabled)
    );
    assert!(!world.has_collisions());
}

/// Pushes every tracked entity upwards and reports after a fixed time
struct Lift {
    tracked: Vec<(ID, f32)>,
}

impl Action for Lift {
    fn action_type(&self) -> ActionType {
        ActionType::Custom(1)
    }

    fn name(&self) -> &str {
        "lift"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        self.tracked.retain_mut(|(id, remaining)| {
            let Some(position) = store.try_get::<Position>(*id) else {
                return false;
            };
            store.set::<Position>(*id, position + Vec3::new(0.0, dt, 0.0));
            *remaining -= dt;
            if *remaining <= 0.0 {
                events.add(*id, ActionType::Custom(1), store.get::<Type>(*id));
                return false;
            }
            true
        });
    }

    fn remove_by_id(&mut self, id: ID) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|(tracked, _)| *tracked != id);
        before != self.tracked.len()
    }

    fn contains(&self, id: ID) -> bool {
        self.tracked.iter().any(|(tracked, _)| *tracked == id)
    }

    fn len(&self) -> usize {
        self.tracked.len()
    }

    fn clear(&mut self) {
        self.tracked.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_custom_engine_runs_in_tick() {
    let mut world = World::new();
    let id = world.create();
    world
        .register_action(Box::new(Lift { tracked: vec![(id, 1.0)] }))
        .unwrap();
    assert!(world.is_active(id, ActionType::Custom(1)));

    world.tick(0.5);
    assert_eq!(world.get::<Position>(id), Vec3::new(0.0, 0.5, 0.0));
    assert!(world.events().is_empty());

    world.tick(0.5);
    assert!(world
        .events()
        .iter()
        .any(|e| e.id == id && e.action == ActionType::Custom(1)));
    assert_eq!(world.custom_action::<Lift>().map(|lift| lift.len()), Some(0));
}

#[test]
fn test_custom_engine_forgets_removed_entities() {
    let mut world = World::new();
    let id = world.create();
    world
        .register_action(Box::new(Lift { tracked: vec![(id, 10.0)] }))
        .unwrap();

    world.remove(id);
    assert_eq!(world.custom_action::<Lift>().map(|lift| lift.len()), Some(0));
}

#[test]
fn test_duplicate_custom_engine_is_rejected() {
    let mut world = World::new();
    world.register_action(Box::new(Lift { tracked: Vec::new() })).unwrap();
    let err = world
        .register_action(Box::new(Lift { tracked: Vec::new() }))
        .unwrap_err();
    assert_eq!(err, WorldError::DuplicateAction("lift".to_string()));
}

#[test]
fn test_templates_attach_actions() {
    let templates = EntityTemplates::from_toml_str(
        r#"
        [[template]]
        name = "spark"
        type = 9

        [[template.actions]]
        action = "move_by"
        velocity = { x = 4.0, y = 0.0, z = 0.0 }
        ttl = 1.0

        [[template.actions]]
        action = "remove_after"
        ttl = 1.0
        "#,
    )
    .unwrap();

    let mut world = World::new();
    assert_eq!(
        world.create_from_template_name("spark", Vec3::ZERO),
        Err(WorldError::TemplatesNotConfigured)
    );

    world.set_templates(templates);
    let id = world.create_from_template_name("spark", Vec3::new(1.0, 1.0, 0.0)).unwrap();
    assert_eq!(world.get::<Type>(id), 9);
    assert_eq!(world.name_of(id), Some("spark"));
    assert!(world.is_active(id, ActionType::MoveBy));
    assert!(world.is_active(id, ActionType::RemoveAfter));

    world.tick(0.5);
    assert_eq!(world.get::<Position>(id), Vec3::new(3.0, 1.0, 0.0));
    world.tick(0.5);
    assert!(!world.contains(id));
    assert!(world.create_from_template_name("ghost", Vec3::ZERO).is_err());
}
