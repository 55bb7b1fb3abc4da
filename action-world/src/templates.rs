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
//! Entity templates
//!
//! A template bundles the initial channel values of a kind of entity, plus
//! actions to attach right after creation. Templates are looked up by the
//! [`StaticHash`] of their name.
//!
//! ```
//! use action_world::names::StaticHash;
//! use action_world::templates::EntityTemplates;
//!
//! let templates = EntityTemplates::from_toml_str(
//!     r#"
//!     [[template]]
//!     name = "asteroid"
//!     type = 2
//!     texture = { handle = 7, dim = { x = 32.0, y = 32.0 } }
//!
//!     [[template.actions]]
//!     action = "rotate"
//!     velocity = { x = 1.5, y = 0.0, z = 0.0 }
//!     "#,
//! )
//! .unwrap();
//!
//! let asteroid = templates.find(StaticHash::new("asteroid")).unwrap();
//! assert_eq!(asteroid.entity_type, 2);
//! assert_eq!(asteroid.actions.len(), 1);
//! ```

use crate::actions::ActionSettings;
use crate::ecs::components::{Color, Texture, Vec3};
use crate::error::WorldResult;
use crate::names::StaticHash;
use serde::{Deserialize, Serialize};

/// Initial state of a kind of entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTemplate {
    pub name: String,
    pub texture: Texture,
    #[serde(rename = "type")]
    pub entity_type: i32,
    /// Planar angle in radians
    pub rotation: f32,
    pub scale: Vec3,
    pub color: Color,
    /// Actions attached after creation, in order
    pub actions: Vec<ActionSettings>,
}

impl Default for EntityTemplate {
    fn default() -> Self {
        EntityTemplate {
            name: StaticHash::NONE_TEXT.to_string(),
            texture: Texture::default(),
            entity_type: 0,
            rotation: 0.0,
            scale: Vec3::ONE,
            color: Color::WHITE,
            actions: Vec::new(),
        }
    }
}

impl EntityTemplate {
    pub fn new(name: &str, texture: Texture, entity_type: i32) -> Self {
        EntityTemplate {
            name: name.to_string(),
            texture,
            entity_type,
            ..Self::default()
        }
    }

    pub fn with_action(mut self, settings: ActionSettings) -> Self {
        self.actions.push(settings);
        self
    }
}

#[derive(Deserialize)]
struct TemplateDocument {
    #[serde(default, rename = "template")]
    templates: Vec<EntityTemplate>,
}

/// Table of templates keyed by name hash
#[derive(Debug, Clone, Default)]
pub struct EntityTemplates {
    templates: Vec<EntityTemplate>,
    hashes: Vec<StaticHash>,
}

impl EntityTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `[[template]]` table of a TOML document
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let document: TemplateDocument = toml::from_str(text)?;
        let mut table = EntityTemplates::new();
        for template in document.templates {
            table.add(template);
        }
        tracing::debug!(count = table.len(), "entity templates loaded");
        Ok(table)
    }

    /// Add a template, replacing one with the same name
    pub fn add(&mut self, template: EntityTemplate) -> StaticHash {
        let hash = StaticHash::new(&template.name);
        match self.hashes.iter().position(|h| *h == hash) {
            Some(index) => {
                tracing::debug!(name = %template.name, "replacing entity template");
                self.templates[index] = template;
            }
            None => {
                self.templates.push(template);
                self.hashes.push(hash);
            }
        }
        hash
    }

    pub fn find(&self, hash: StaticHash) -> Option<&EntityTemplate> {
        let index = self.hashes.iter().position(|h| *h == hash)?;
        Some(&self.templates[index])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&EntityTemplate> {
        self.find(StaticHash::new(name))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityTemplate> {
        self.templates.iter()
    }
}
