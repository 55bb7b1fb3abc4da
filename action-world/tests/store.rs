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
//! Entity store behavior seen from outside the crate

use action_world::ecs::channels::{Color, Hash, Name, Position, Rotation, Scale, Texture, Type};
use action_world::ecs::components::{self, Vec3};
use action_world::ecs::{ChannelArray, World};
use action_world::names::StaticHash;

#[test]
fn test_create_round_trip() {
    let mut world = World::new();
    let texture = components::Texture::new(4, 32.0, 16.0);
    let color = components::Color::new(0.5, 0.25, 1.0, 0.75);
    let id = world.create_with(
        Vec3::new(10.0, 20.0, 1.0),
        texture,
        3,
        0.5,
        Vec3::new(2.0, 2.0, 1.0),
        color,
    );

    assert_eq!(world.get::<Position>(id), Vec3::new(10.0, 20.0, 1.0));
    assert_eq!(world.get::<Texture>(id), texture);
    assert_eq!(world.get::<Type>(id), 3);
    assert_eq!(world.get::<Rotation>(id).x, 0.5);
    assert_eq!(world.get::<Scale>(id), Vec3::new(2.0, 2.0, 1.0));
    assert_eq!(world.get::<Color>(id), color);
    assert_eq!(world.get::<Name>(id), -1);
    assert_eq!(world.get::<Hash>(id), StaticHash::none());
}

#[test]
fn test_removal_keeps_other_ids_stable() {
    let mut store = ChannelArray::with_capacity(2);
    let a = store.add();
    let b = store.add();
    let c = store.add();
    store.set::<Position>(a, Vec3::new(1.0, 0.0, 0.0));
    store.set::<Position>(c, Vec3::new(3.0, 0.0, 0.0));

    assert!(store.remove(b));
    assert!(store.contains(a));
    assert!(store.contains(c));
    assert!(!store.contains(b));
    assert_eq!(store.get::<Position>(a), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(store.get::<Position>(c), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_stale_id_is_rejected_after_slot_reuse() {
    let mut store = ChannelArray::new();
    let first = store.add();
    store.remove(first);
    let second = store.add();

    assert_eq!(first.index(), second.index());
    assert!(!store.contains(first));
    assert!(store.try_get::<Position>(first).is_none());
    assert!(!store.remove(first));
}

#[test]
fn test_growth_preserves_mapping() {
    let mut store = ChannelArray::with_capacity(1);
    let ids: Vec<_> = (0..100)
        .map(|i| {
            let id = store.add();
            store.set::<Type>(id, i);
            id
        })
        .collect();

    assert!(store.capacity() >= 100);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(store.get::<Type>(*id), i as i32);
    }
}

#[test]
fn test_lookup_by_type_and_name() {
    let mut world = World::new();
    let texture = components::Texture::default();
    let a = world.create_with(Vec3::ZERO, texture, 1, 0.0, Vec3::ONE, components::Color::WHITE);
    let b = world.create_with(Vec3::ZERO, texture, 2, 0.0, Vec3::ONE, components::Color::WHITE);
    world.attach_name(b, "player").unwrap();

    assert_eq!(world.find_by_type(1), vec![a]);
    assert_eq!(world.find_by_name("player"), Some(b));
    assert_eq!(world.find_by_name("nobody"), None);
    assert_eq!(world.name_of(b), Some("player"));
}
