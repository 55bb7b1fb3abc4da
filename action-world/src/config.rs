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
//! World configuration
//!
//! A [`WorldConfig`] is built in code with the `with_*` builders or loaded
//! once at startup from TOML. Missing keys take their defaults.
//!
//! ```
//! use action_world::config::WorldConfig;
//!
//! let config = WorldConfig::from_toml_str(
//!     r#"
//!     initial_capacity = 256
//!     collisions = false
//!
//!     [bounding_rect]
//!     x = 0.0
//!     y = 0.0
//!     width = 640.0
//!     height = 480.0
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.initial_capacity, 256);
//! assert_eq!(config.event_capacity, 64);
//! ```

use crate::ecs::components::Rect;
use crate::error::{WorldError, WorldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings a [`World`](crate::ecs::World) is created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Entity slots reserved up front
    pub initial_capacity: usize,
    /// Rectangle bouncing movement is kept in
    pub bounding_rect: Rect,
    /// Whether the collision engine runs
    pub collisions: bool,
    /// Events reserved per tick
    pub event_capacity: usize,
    /// Log forces that are skipped for being non-finite
    pub warn_on_invalid_forces: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            initial_capacity: 64,
            bounding_rect: Rect::new(0.0, 0.0, 1024.0, 768.0),
            collisions: true,
            event_capacity: 64,
            warn_on_invalid_forces: true,
        }
    }
}

impl WorldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_bounding_rect(mut self, rect: Rect) -> Self {
        self.bounding_rect = rect;
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn with_invalid_force_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_invalid_forces = enabled;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let config: WorldConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            WorldError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "world configuration loaded");
        Ok(config)
    }

    /// Check the values make sense together
    pub fn validate(&self) -> WorldResult<()> {
        let r = &self.bounding_rect;
        if !(r.width.is_finite() && r.height.is_finite()) || r.width <= 0.0 || r.height <= 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "bounding rectangle must have a positive size (got {}x{})",
                r.width, r.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.bounding_rect, Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert!(config.collisions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = WorldConfig::new()
            .with_capacity(8)
            .with_collisions(false)
            .with_event_capacity(4)
            .with_bounding_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(config.initial_capacity, 8);
        assert!(!config.collisions);
        assert_eq!(config.event_capacity, 4);
        assert_eq!(config.bounding_rect.width, 10.0);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(WorldConfig::from_toml_str("").unwrap(), WorldConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = WorldConfig::from_toml_str("initial_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_rect() {
        let err = WorldConfig::from_toml_str(
            "[bounding_rect]\nx = 0.0\ny = 0.0\nwidth = 0.0\nheight = 10.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = WorldConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }
}
