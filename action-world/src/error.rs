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
//! Error types
//!
//! Only configuration and attach-time contract checks produce errors. The
//! per-tick update never fails: engines skip instances whose entity is gone.

use crate::ecs::ID;
use thiserror::Error;

/// Errors reported by the world and its collaborators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    /// The identifier does not name a live entity.
    #[error("{0} is not part of the world")]
    EntityNotFound(ID),

    /// Template-based creation was requested without a template table.
    #[error("no entity templates configured")]
    TemplatesNotConfigured,

    /// No template is registered under the given name hash.
    #[error("template not found: {0:#010x}")]
    TemplateNotFound(u32),

    /// Collision support is disabled in the world configuration.
    #[error("collision support is disabled")]
    CollisionsDisabled,

    /// An action engine with the same name is already registered.
    #[error("action '{0}' is already registered")]
    DuplicateAction(String),

    /// A custom engine was built against an incompatible API version.
    #[error("action '{name}' API version {found} is incompatible with engine API version {expected}")]
    IncompatibleApiVersion {
        /// Name of the engine.
        name: String,
        /// Version the engine reports.
        found: String,
        /// Version this crate provides.
        expected: String,
    },

    /// A parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for WorldError {
    fn from(err: toml::de::Error) -> Self {
        WorldError::InvalidConfig(err.to_string())
    }
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
