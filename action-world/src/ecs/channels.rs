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
//! Typed entity channels
//!
//! Every channel is a zero-sized marker implementing [`Channel`]. The marker
//! fixes the value type of the column at compile time, so reading a color
//! column as a vector cannot be expressed:
//!
//! ```
//! use action_world::ecs::{channels, ChannelArray};
//! use action_world::ecs::components::Vec3;
//!
//! let mut store = ChannelArray::new();
//! let id = store.add();
//! store.set::<channels::Position>(id, Vec3::new(1.0, 2.0, 0.0));
//! assert_eq!(store.get::<channels::Position>(id).x, 1.0);
//! ```

use crate::ecs::components::{Color as ColorValue, Texture as TextureValue, Vec3};
use crate::ecs::storage::ChannelColumns;
use crate::names::StaticHash;
use serde::{Deserialize, Serialize};
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Runtime tag of a channel, used for diagnostics and config data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    /// World position
    Position,
    /// Rotation, x holds the planar angle in radians
    Rotation,
    /// Scale
    Scale,
    /// Render handle and dimensions
    Texture,
    /// RGBA tint
    Color,
    /// Integer category tag
    Type,
    /// Per-tick force accumulator
    Force,
    /// Index into the string table, -1 if unnamed
    Name,
    /// Content hash of the name
    Hash,
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelId::Position => "position",
            ChannelId::Rotation => "rotation",
            ChannelId::Scale => "scale",
            ChannelId::Texture => "texture",
            ChannelId::Color => "color",
            ChannelId::Type => "type",
            ChannelId::Force => "force",
            ChannelId::Name => "name",
            ChannelId::Hash => "hash",
        };
        f.write_str(name)
    }
}

/// A typed column of the entity store
///
/// Sealed: the set of channels is fixed.
pub trait Channel: sealed::Sealed + 'static {
    /// Value type stored in the column
    type Value: Copy + fmt::Debug;

    /// Runtime tag of this channel
    const ID: ChannelId;

    /// Borrow the column
    fn column(columns: &ChannelColumns) -> &Vec<Self::Value>;

    /// Mutably borrow the column
    fn column_mut(columns: &mut ChannelColumns) -> &mut Vec<Self::Value>;
}

macro_rules! channel {
    ($(#[$doc:meta])* $marker:ident, $value:ty, $field:ident, $id:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl sealed::Sealed for $marker {}

        impl Channel for $marker {
            type Value = $value;
            const ID: ChannelId = $id;

            #[inline]
            fn column(columns: &ChannelColumns) -> &Vec<$value> {
                &columns.$field
            }

            #[inline]
            fn column_mut(columns: &mut ChannelColumns) -> &mut Vec<$value> {
                &mut columns.$field
            }
        }
    };
}

channel!(
    /// World position
    Position, Vec3, position, ChannelId::Position
);
channel!(
    /// Rotation; x is the planar angle in radians
    Rotation, Vec3, rotation, ChannelId::Rotation
);
channel!(
    /// Scale
    Scale, Vec3, scale, ChannelId::Scale
);
channel!(
    /// Render handle and dimensions
    Texture, TextureValue, texture, ChannelId::Texture
);
channel!(
    /// RGBA tint
    Color, ColorValue, color, ChannelId::Color
);
channel!(
    /// Integer category tag
    Type, i32, entity_type, ChannelId::Type
);
channel!(
    /// Force accumulator, zeroed at the start of every tick
    Force, Vec3, force, ChannelId::Force
);
channel!(
    /// Index into the string table, -1 if unnamed
    Name, i32, name, ChannelId::Name
);
channel!(
    /// Content hash of the name
    Hash, StaticHash, hash, ChannelId::Hash
);

/// Selector for the vector-valued channels
///
/// Engines that can drive any vector channel (the scale engine, for
/// example) store one of these per instance instead of a channel marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vec3Channel {
    /// [`Position`]
    Position,
    /// [`Rotation`]
    Rotation,
    /// [`Scale`]
    #[default]
    Scale,
    /// [`Force`]
    Force,
}

impl Vec3Channel {
    /// Runtime tag of the selected channel
    pub fn id(&self) -> ChannelId {
        match self {
            Vec3Channel::Position => ChannelId::Position,
            Vec3Channel::Rotation => ChannelId::Rotation,
            Vec3Channel::Scale => ChannelId::Scale,
            Vec3Channel::Force => ChannelId::Force,
        }
    }

    pub(crate) fn column(self, columns: &ChannelColumns) -> &Vec<Vec3> {
        match self {
            Vec3Channel::Position => Position::column(columns),
            Vec3Channel::Rotation => Rotation::column(columns),
            Vec3Channel::Scale => Scale::column(columns),
            Vec3Channel::Force => Force::column(columns),
        }
    }

    pub(crate) fn column_mut(self, columns: &mut ChannelColumns) -> &mut Vec<Vec3> {
        match self {
            Vec3Channel::Position => Position::column_mut(columns),
            Vec3Channel::Rotation => Rotation::column_mut(columns),
            Vec3Channel::Scale => Scale::column_mut(columns),
            Vec3Channel::Force => Force::column_mut(columns),
        }
    }
}
