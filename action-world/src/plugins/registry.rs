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
//! Registry of custom action engines

use crate::actions::{Action, ActionEventBuffer, ActionType, ACTION_API_VERSION};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::{WorldError, WorldResult};
use crate::report::ReportWriter;
use semver::Version;

/// Custom action engines, run in registration order after the built-in ones
///
/// Registration rejects a second engine with the same name and engines
/// written against an incompatible [`ACTION_API_VERSION`].
#[derive(Default)]
pub struct ActionRegistry {
    engines: Vec<Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom engine
    ///
    /// # Errors
    ///
    /// - [`WorldError::DuplicateAction`] if an engine with the same name exists
    /// - [`WorldError::IncompatibleApiVersion`] if the engine's API version
    ///   does not match this crate's
    pub fn register(&mut self, engine: Box<dyn Action>) -> WorldResult<()> {
        let name = engine.name().to_string();
        if self.engines.iter().any(|e| e.name() == name) {
            return Err(WorldError::DuplicateAction(name));
        }

        let found = engine.api_version();
        if !is_version_compatible(found, ACTION_API_VERSION) {
            return Err(WorldError::IncompatibleApiVersion {
                name,
                found: found.to_string(),
                expected: ACTION_API_VERSION.to_string(),
            });
        }

        tracing::info!(name = %name, action_type = %engine.action_type(), "custom action registered");
        self.engines.push(engine);
        Ok(())
    }

    /// Remove a registered engine by name
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn Action>> {
        let index = self.engines.iter().position(|e| e.name() == name)?;
        Some(self.engines.remove(index))
    }

    /// Update every engine once
    pub fn update_all(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        for engine in &mut self.engines {
            engine.update(dt, store, events);
        }
    }

    /// Forward an entity removal to every engine
    pub fn remove_by_id(&mut self, id: ID) {
        for engine in &mut self.engines {
            engine.remove_by_id(id);
        }
    }

    /// First engine of concrete type `T`
    pub fn get<T: Action + 'static>(&self) -> Option<&T> {
        self.engines.iter().find_map(|e| e.as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Action + 'static>(&mut self) -> Option<&mut T> {
        self.engines
            .iter_mut()
            .find_map(|e| e.as_any_mut().downcast_mut::<T>())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&dyn Action> {
        self.engines
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// Cancel the instance of `id` in every engine tagged `action_type`
    pub fn stop_action(&mut self, id: ID, action_type: ActionType) -> bool {
        let mut stopped = false;
        for engine in self.engines.iter_mut().filter(|e| e.action_type() == action_type) {
            stopped |= engine.remove_by_id(id);
        }
        stopped
    }

    /// Check whether an engine tagged `action_type` has an instance for `id`
    pub fn is_active(&self, id: ID, action_type: ActionType) -> bool {
        self.engines
            .iter()
            .any(|e| e.action_type() == action_type && e.contains(id))
    }

    /// Drop every instance of every engine, keeping the engines registered
    pub fn clear(&mut self) {
        for engine in &mut self.engines {
            engine.clear();
        }
    }

    /// Check whether any engine has an instance attached to `id`
    pub fn contains(&self, id: ID) -> bool {
        self.engines.iter().any(|e| e.contains(id))
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Names of the registered engines, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.engines.iter().map(|e| e.name())
    }

    pub fn save_report(&self, writer: &mut dyn ReportWriter) {
        for engine in self.engines.iter().filter(|e| !e.is_empty()) {
            engine.save_report(writer);
        }
    }
}

/// Check whether an engine built against `engine_version` works with `api_version`
///
/// Majors must match. From 1.0 on, the engine's minor may not exceed the
/// API's; below 1.0 every minor is a breaking change and must match exactly.
/// Unparsable versions are incompatible.
pub fn is_version_compatible(engine_version: &str, api_version: &str) -> bool {
    let (Ok(engine), Ok(api)) = (Version::parse(engine_version), Version::parse(api_version)) else {
        return false;
    };
    if engine.major != api.major {
        return false;
    }
    if engine.major != 0 {
        engine.minor <= api.minor
    } else {
        engine.minor == api.minor
    }
}
