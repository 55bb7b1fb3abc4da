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
//! Basic example demonstrating the action world
//!
//! This example loads two entity templates, spawns a few entities, lets a
//! behavior react to their events and prints a report at the end.

use action_world::actions::{ActionEvent, ActionType, ShapeType};
use action_world::ecs::channels::{Position, Rotation, Scale};
use action_world::ecs::components::{Color, Texture, Vec3};
use action_world::ecs::{Behaviors, World, WorldContext};
use action_world::report::TextReport;
use action_world::templates::EntityTemplates;
use action_world::tweening::Tweening;
use action_world::WorldResult;

const TEMPLATES: &str = r#"
[[template]]
name = "asteroid"
type = 1
texture = { handle = 1, dim = { x = 24.0, y = 24.0 } }

[[template.actions]]
action = "rotate"
velocity = { x = 0.8, y = 0.0, z = 0.0 }

[[template.actions]]
action = "collider"
shape = "circle"

[[template]]
name = "spark"
type = 2
texture = { handle = 2, dim = { x = 4.0, y = 4.0 } }

[[template.actions]]
action = "move_by_radial"
speed = 40.0
ttl = 1.0

[[template.actions]]
action = "remove_after"
ttl = 1.5
"#;

/// Prints what happens to the entities
struct Narrator;

impl Behaviors for Narrator {
    fn process_event(&mut self, event: &ActionEvent, ctx: &mut WorldContext<'_>) {
        match event.action {
            ActionType::Kill => println!("  {} removed", event.id),
            ActionType::Collision => println!("  {} (type {}) collided", event.id, event.entity_type),
            action => {
                let position = ctx.store.try_get::<Position>(event.id).unwrap_or_default();
                println!("  {} finished {} at {}", event.id, action, position);
            }
        }
    }
}

fn main() -> WorldResult<()> {
    println!("Action World - Basic Example");
    println!("============================\n");

    let mut world = World::new();
    world.set_templates(EntityTemplates::from_toml_str(TEMPLATES)?);
    world.set_behaviors(Narrator);

    let asteroid = world.create_from_template_name("asteroid", Vec3::new(100.0, 100.0, 0.0))?;
    let spark = world.create_from_template_name("spark", Vec3::new(60.0, 100.0, 0.0))?;
    world.attach_collider(spark, ShapeType::Circle)?;

    let pulse = world.create_with(
        Vec3::new(300.0, 200.0, 0.0),
        Texture::new(3, 16.0, 16.0),
        3,
        0.0,
        Vec3::ONE,
        Color::WHITE,
    );
    world.scale(pulse, Vec3::ONE, Vec3::splat(2.0), 0.5, 2, Tweening::OutBounce)?;
    world.move_to(
        pulse,
        Vec3::new(300.0, 200.0, 0.0),
        Vec3::new(400.0, 200.0, 0.0),
        1.0,
        Tweening::InOutCubic,
    )?;

    println!("Created {} entities", world.len());

    let dt = 0.125;
    for step in 1..=16 {
        println!("tick {step}:");
        world.tick(dt);
    }

    println!();
    println!("asteroid rotation: {:.2} rad", world.get::<Rotation>(asteroid).x);
    println!("pulse scale: {}", world.get::<Scale>(pulse));
    println!("spark alive: {}\n", world.contains(spark));

    let mut report = TextReport::new();
    world.save_report(&mut report);
    println!("{}", report.as_str());

    Ok(())
}
