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
//! Sampled paths
//!
//! Path-driven engines evaluate a [`PathProvider`] at the normalized progress
//! of each instance. Providers are shared between instances and must be
//! stateless from the engine's point of view.

use crate::ecs::components::Vec3;
use std::fmt;

/// A curve sampled by normalized time in `[0, 1]`
pub trait PathProvider: Send + Sync + fmt::Debug {
    /// Sample the path at `t`
    fn sample(&self, t: f32) -> Vec3;
}

/// Piecewise-linear keyframe path
///
/// Keys are kept sorted by time. Sampling before the first key or after
/// the last returns that key's value.
#[derive(Debug, Clone, Default)]
pub struct KeyframePath<T> {
    keys: Vec<(f32, T)>,
}

/// Keyframe path over vectors
pub type V3Path = KeyframePath<Vec3>;
/// Keyframe path over scalars
pub type FloatPath = KeyframePath<f32>;

impl<T: Lerp> KeyframePath<T> {
    /// Create an empty path
    pub fn new() -> Self {
        KeyframePath { keys: Vec::new() }
    }

    /// Add a key at time `t`; keys may be added in any order
    pub fn add(&mut self, t: f32, value: T) -> &mut Self {
        let at = self.keys.partition_point(|(kt, _)| *kt <= t);
        self.keys.insert(at, (t, value));
        self
    }

    /// Builder form of [`add`](Self::add)
    pub fn with_key(mut self, t: f32, value: T) -> Self {
        self.add(t, value);
        self
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the path has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluate the path at `t`, `None` for an empty path
    pub fn get(&self, t: f32) -> Option<T> {
        let (first, last) = (self.keys.first()?, self.keys.last()?);
        if t <= first.0 {
            return Some(first.1);
        }
        if t >= last.0 {
            return Some(last.1);
        }
        let upper = self.keys.partition_point(|(kt, _)| *kt <= t);
        let (t0, v0) = self.keys[upper - 1];
        let (t1, v1) = self.keys[upper];
        let span = t1 - t0;
        if span <= 0.0 {
            return Some(v1);
        }
        Some(T::lerp(v0, v1, (t - t0) / span))
    }
}

/// Straight-line blend used between keys
pub trait Lerp: Copy {
    /// Blend `a` towards `b` by `f` in `[0, 1]`
    fn lerp(a: Self, b: Self, f: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: f32, b: f32, f: f32) -> f32 {
        a + (b - a) * f
    }
}

impl Lerp for Vec3 {
    fn lerp(a: Vec3, b: Vec3, f: f32) -> Vec3 {
        a + (b - a) * f
    }
}

impl PathProvider for V3Path {
    fn sample(&self, t: f32) -> Vec3 {
        self.get(t).unwrap_or(Vec3::ONE)
    }
}

impl PathProvider for FloatPath {
    fn sample(&self, t: f32) -> Vec3 {
        Vec3::splat(self.get(t).unwrap_or(1.0))
    }
}
