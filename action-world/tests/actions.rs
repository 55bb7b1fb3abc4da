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
//! Timing and repeat behavior of the built-in actions, driven through the
//! world tick

use std::sync::Arc;

use action_world::actions::ActionType;
use action_world::ecs::channels::{Color, Position, Rotation, Scale};
use action_world::ecs::components::{self, Vec3};
use action_world::ecs::{World, ID};
use action_world::path::FloatPath;
use action_world::tweening::Tweening;

const DT: f32 = 0.25;

/// Tick until `action` fires for `id`, returning the 1-based tick count
fn ticks_until_event(world: &mut World, id: ID, action: ActionType, limit: usize) -> Option<usize> {
    (1..=limit).find(|_| {
        world.tick(DT);
        world
            .events()
            .iter()
            .any(|event| event.id == id && event.action == action)
    })
}

#[test]
fn test_scale_mode_two_completes_twice() {
    let mut world = World::new();
    let id = world.create();
    world
        .scale(id, Vec3::ONE, Vec3::splat(2.0), 1.0, 2, Tweening::Linear)
        .unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Scale, 100), Some(8));
    assert!(!world.is_active(id, ActionType::Scale));
    assert_eq!(world.get::<Scale>(id), Vec3::splat(2.0));
}

#[test]
fn test_scale_mode_zero_completes_once() {
    let mut world = World::new();
    let id = world.create();
    world
        .scale(id, Vec3::ONE, Vec3::splat(3.0), 1.0, 0, Tweening::Linear)
        .unwrap();
    assert_eq!(world.get::<Scale>(id), Vec3::ONE);

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Scale, 100), Some(4));
    assert!(!world.is_active(id, ActionType::Scale));

    for _ in 0..8 {
        world.tick(DT);
        assert!(world.events().is_empty());
    }
}

#[test]
fn test_scale_loop_never_finishes() {
    let mut world = World::new();
    let id = world.create();
    world
        .scale(id, Vec3::ONE, Vec3::splat(2.0), 1.0, -1, Tweening::InOutQuad)
        .unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Scale, 40), None);
    assert!(world.is_active(id, ActionType::Scale));
}

#[test]
fn test_scale_by_path_follows_repeat_contract() {
    let mut world = World::new();
    let id = world.create();
    let path = FloatPath::new().with_key(0.0, 1.0).with_key(1.0, 5.0);
    world.scale_by_path(id, Arc::new(path), 1.0, 2).unwrap();
    assert_eq!(world.get::<Scale>(id), Vec3::ONE);

    world.tick(DT * 2.0);
    assert_eq!(world.get::<Scale>(id), Vec3::splat(3.0));

    assert_eq!(ticks_until_event(&mut world, id, ActionType::ScaleByPath, 100), Some(6));
}

#[test]
fn test_color_flash_reaches_end_color() {
    let mut world = World::new();
    let id = world.create();
    let red = components::Color::new(1.0, 0.0, 0.0, 1.0);
    world
        .flash_color(id, components::Color::WHITE, red, 0.5, 0, Tweening::Linear)
        .unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::ColorFlash, 10), Some(2));
    assert_eq!(world.get::<Color>(id), red);
}

#[test]
fn test_sinus_pulse_returns_to_start() {
    let mut world = World::new();
    let id = world.create();
    world
        .scale(id, Vec3::ONE, Vec3::splat(2.0), 1.0, 0, Tweening::Sinus)
        .unwrap();

    world.tick(DT * 2.0);
    assert!((world.get::<Scale>(id).x - 2.0).abs() < 1e-4);

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Scale, 10), Some(2));
    let scale = world.get::<Scale>(id);
    assert!((scale.x - 1.0).abs() < 1e-4);
    assert!((scale.y - 1.0).abs() < 1e-4);
    assert!((scale.z - 1.0).abs() < 1e-4);
}

#[test]
fn test_sinus_color_flash_returns_to_start() {
    let mut world = World::new();
    let id = world.create();
    let red = components::Color::new(1.0, 0.0, 0.0, 1.0);
    world
        .flash_color(id, components::Color::WHITE, red, 1.0, 0, Tweening::Sinus)
        .unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::ColorFlash, 10), Some(4));
    let color = world.get::<Color>(id);
    assert!((color.g - 1.0).abs() < 1e-4);
    assert!((color.b - 1.0).abs() < 1e-4);
}

#[test]
fn test_fade_alpha_in_from_explicit_start() {
    let mut world = World::new();
    let id = world.create();
    world.fade_alpha(id, 0.0, 1.0, 0.5, Tweening::Linear).unwrap();
    assert_eq!(world.get::<Color>(id).a, 0.0);

    assert_eq!(ticks_until_event(&mut world, id, ActionType::AlphaFadeTo, 10), Some(2));
    assert_eq!(world.get::<Color>(id).a, 1.0);
}

#[test]
fn test_move_to_lands_on_target() {
    let mut world = World::new();
    let id = world.create();
    world
        .move_to(id, Vec3::ZERO, Vec3::new(8.0, 4.0, 0.0), 1.0, Tweening::OutBack)
        .unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::MoveTo, 10), Some(4));
    assert_eq!(world.get::<Position>(id), Vec3::new(8.0, 4.0, 0.0));
}

#[test]
fn test_move_by_negative_ttl_runs_until_stopped() {
    let mut world = World::new();
    let id = world.create();
    world.move_by(id, Vec3::new(1.0, 0.0, 0.0), -1.0, false).unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::MoveBy, 16), None);
    assert!(world.is_active(id, ActionType::MoveBy));
    assert!((world.get::<Position>(id).x - 4.0).abs() < 1e-4);

    world.stop_action(id, ActionType::MoveBy);
    assert!(!world.is_active(id, ActionType::MoveBy));
}

#[test]
fn test_rotate_forever_with_zero_ttl() {
    let mut world = World::new();
    let id = world.create();
    world.rotate(id, Vec3::new(1.0, 0.0, 0.0), 0.0).unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Rotate, 20), None);
    assert!((world.get::<Rotation>(id).x - 5.0).abs() < 1e-4);
}

#[test]
fn test_remove_after_kills_entity() {
    let mut world = World::new();
    let id = world.create();
    world.scale(id, Vec3::ONE, Vec3::splat(2.0), 4.0, -1, Tweening::Linear).unwrap();
    world.remove_after(id, 0.5).unwrap();

    assert_eq!(ticks_until_event(&mut world, id, ActionType::Kill, 10), Some(2));
    assert!(!world.contains(id));
    assert!(!world.is_active(id, ActionType::Scale));
    assert_eq!(world.actions().active_count(), 0);
}

#[test]
fn test_attach_to_missing_entity_fails() {
    let mut world = World::new();
    let id = world.create();
    world.remove(id);

    assert!(world.move_by(id, Vec3::ZERO, 1.0, false).is_err());
    assert!(world
        .scale(id, Vec3::ONE, Vec3::ONE, 1.0, 0, Tweening::Linear)
        .is_err());
    assert!(world.remove_after(id, 1.0).is_err());
}
