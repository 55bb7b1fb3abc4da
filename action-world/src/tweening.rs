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
//! Interpolation kernel
//!
//! Robert Penner's easing equations, all sharing the signature
//! `f(t, start, end, duration) -> value`. Only [`linear`] clamps `t / duration`
//! to `[0, 1]`; every other curve is evaluated as is, so back and elastic
//! curves overshoot and callers must not clamp generically.
//!
//! Curves are selected through the closed [`Tweening`] enumeration, which
//! also carries the stable integer index used by authored data.
//!
//! # Example
//!
//! ```
//! use action_world::tweening::{interpolate, Tweening};
//! use action_world::ecs::components::Vec3;
//!
//! let half = interpolate(Tweening::Linear, Vec3::ZERO, Vec3::splat(10.0), 0.5, 1.0);
//! assert_eq!(half, Vec3::splat(5.0));
//! assert_eq!(Tweening::from_index(99), Tweening::Linear);
//! ```

use crate::ecs::components::{Color, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Signature shared by every scalar easing function
pub type EasingFn = fn(f32, f32, f32, f32) -> f32;

/// Overshoot coefficient of the back curves
const BACK_OVERSHOOT: f32 = 1.70158;
/// In-out back blend factor
const BACK_IN_OUT_SCALE: f32 = 1.525;

/// Linear interpolation with `t / duration` clamped to `[0, 1]`
pub fn linear(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let n = (t / duration).clamp(0.0, 1.0);
    start + (end - start) * n
}

/// Half sine pulse: returns to `start` at `duration`, peaks at `end` halfway
pub fn ease_sinus(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    start + (end - start) * (t / duration * PI).sin()
}

/// Quadratic ease in
pub fn ease_in_quad(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let t = t / duration;
    c * t * t + start
}

/// Quadratic ease out
pub fn ease_out_quad(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let t = t / duration;
    -c * t * (t - 2.0) + start
}

/// Quadratic ease in-out
pub fn ease_in_out_quad(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + start;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// Quartic ease in
pub fn ease_in_quart(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    start + (end - start) * (t / duration).powi(4)
}

/// Back ease in: pulls back below `start` before accelerating
pub fn ease_in_back(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let s = BACK_OVERSHOOT;
    let t = t / duration;
    c * t * t * ((s + 1.0) * t - s) + start
}

/// Back ease out: overshoots `end` before settling
pub fn ease_out_back(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let s = BACK_OVERSHOOT;
    let t = t / duration - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + start
}

/// Back ease in-out
pub fn ease_in_out_back(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + start;
    }
    t -= 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + start
}

/// Cubic ease in
pub fn ease_in_cubic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let t = t / duration;
    c * t * t * t + start
}

/// Cubic ease out
pub fn ease_out_cubic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let t = t / duration - 1.0;
    c * (t * t * t + 1.0) + start
}

/// Cubic ease in-out
pub fn ease_in_out_cubic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + start;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + start
}

/// Elastic ease in; period 0.3 * duration, amplitude the full delta
pub fn ease_in_elastic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    if t == 0.0 {
        return start;
    }
    let mut t = t / duration;
    if t == 1.0 {
        return start + c;
    }
    let p = duration * 0.3;
    let a = c;
    let s = p / 4.0;
    t -= 1.0;
    let post_fix = a * 2.0_f32.powf(10.0 * t);
    -(post_fix * ((t * duration - s) * (2.0 * PI) / p).sin()) + start
}

/// Elastic ease out
pub fn ease_out_elastic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    if t == 0.0 {
        return start;
    }
    let t = t / duration;
    if t == 1.0 {
        return start + c;
    }
    let p = duration * 0.3;
    let a = c;
    let s = p / 4.0;
    a * 2.0_f32.powf(-10.0 * t) * ((t * duration - s) * (2.0 * PI) / p).sin() + c + start
}

/// Elastic ease in-out; period 0.45 * duration
pub fn ease_in_out_elastic(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    if t == 0.0 {
        return start;
    }
    let mut t = t / (duration / 2.0);
    if t == 2.0 {
        return start + c;
    }
    let p = duration * (0.3 * 1.5);
    let a = c;
    let s = p / 4.0;
    if t < 1.0 {
        t -= 1.0;
        let post_fix = a * 2.0_f32.powf(10.0 * t);
        return -0.5 * (post_fix * ((t * duration - s) * (2.0 * PI) / p).sin()) + start;
    }
    t -= 1.0;
    let post_fix = a * 2.0_f32.powf(-10.0 * t);
    post_fix * ((t * duration - s) * (2.0 * PI) / p).sin() * 0.5 + c + start
}

/// Bounce ease in, the mirror image of [`ease_out_bounce`]
pub fn ease_in_bounce(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    c - ease_out_bounce(duration - t, 0.0, c, duration) + start
}

/// Bounce ease out
///
/// Four parabolic segments split at 1/2.75, 2/2.75 and 2.5/2.75 of the
/// normalized time. The constants are the reference values and must not be
/// rounded or simplified.
pub fn ease_out_bounce(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    let mut t = t / duration;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + start
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + start
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + start
    } else {
        t -= 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + start
    }
}

/// Bounce ease in-out
pub fn ease_in_out_bounce(t: f32, start: f32, end: f32, duration: f32) -> f32 {
    let c = end - start;
    if t < duration / 2.0 {
        ease_in_bounce(t * 2.0, 0.0, c, duration) * 0.5 + start
    } else {
        ease_out_bounce(t * 2.0 - duration, 0.0, c, duration) * 0.5 + c * 0.5 + start
    }
}

/// Closed set of easing curves
///
/// The discriminant order is the stable index used by authored data;
/// never reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tweening {
    /// [`linear`]
    #[default]
    Linear,
    /// [`ease_sinus`]
    Sinus,
    /// [`ease_in_quad`]
    InQuad,
    /// [`ease_out_quad`]
    OutQuad,
    /// [`ease_in_out_quad`]
    InOutQuad,
    /// [`ease_in_back`]
    InBack,
    /// [`ease_out_back`]
    OutBack,
    /// [`ease_in_out_back`]
    InOutBack,
    /// [`ease_in_cubic`]
    InCubic,
    /// [`ease_out_cubic`]
    OutCubic,
    /// [`ease_in_out_cubic`]
    InOutCubic,
    /// [`ease_in_elastic`]
    InElastic,
    /// [`ease_out_elastic`]
    OutElastic,
    /// [`ease_in_out_elastic`]
    InOutElastic,
    /// [`ease_in_bounce`]
    InBounce,
    /// [`ease_out_bounce`]
    OutBounce,
    /// [`ease_in_out_bounce`]
    InOutBounce,
}

impl Tweening {
    /// Every curve, in index order
    pub const ALL: [Tweening; 17] = [
        Tweening::Linear,
        Tweening::Sinus,
        Tweening::InQuad,
        Tweening::OutQuad,
        Tweening::InOutQuad,
        Tweening::InBack,
        Tweening::OutBack,
        Tweening::InOutBack,
        Tweening::InCubic,
        Tweening::OutCubic,
        Tweening::InOutCubic,
        Tweening::InElastic,
        Tweening::OutElastic,
        Tweening::InOutElastic,
        Tweening::InBounce,
        Tweening::OutBounce,
        Tweening::InOutBounce,
    ];

    /// Resolve a stable index; out-of-range indices fall back to linear
    pub fn from_index(index: i32) -> Tweening {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Tweening::Linear)
    }

    /// Stable index of this curve
    pub fn index(self) -> i32 {
        self as i32
    }

    /// The scalar easing function for this curve
    pub fn function(self) -> EasingFn {
        match self {
            Tweening::Linear => linear,
            Tweening::Sinus => ease_sinus,
            Tweening::InQuad => ease_in_quad,
            Tweening::OutQuad => ease_out_quad,
            Tweening::InOutQuad => ease_in_out_quad,
            Tweening::InBack => ease_in_back,
            Tweening::OutBack => ease_out_back,
            Tweening::InOutBack => ease_in_out_back,
            Tweening::InCubic => ease_in_cubic,
            Tweening::OutCubic => ease_out_cubic,
            Tweening::InOutCubic => ease_in_out_cubic,
            Tweening::InElastic => ease_in_elastic,
            Tweening::OutElastic => ease_out_elastic,
            Tweening::InOutElastic => ease_in_out_elastic,
            Tweening::InBounce => ease_in_bounce,
            Tweening::OutBounce => ease_out_bounce,
            Tweening::InOutBounce => ease_in_out_bounce,
        }
    }

    /// Evaluate the curve; a non-positive duration yields `end`
    #[inline]
    pub fn apply(self, t: f32, start: f32, end: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            return end;
        }
        (self.function())(t, start, end, duration)
    }
}

/// Values that can be interpolated channel-wise with a [`Tweening`] curve
pub trait Interpolate: Copy {
    /// Interpolate between `start` and `end` at time `t` of `duration`
    fn interpolate(tweening: Tweening, start: Self, end: Self, t: f32, duration: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(tweening: Tweening, start: f32, end: f32, t: f32, duration: f32) -> f32 {
        tweening.apply(t, start, end, duration)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(tweening: Tweening, start: Vec2, end: Vec2, t: f32, duration: f32) -> Vec2 {
        Vec2::new(
            tweening.apply(t, start.x, end.x, duration),
            tweening.apply(t, start.y, end.y, duration),
        )
    }
}

impl Interpolate for Vec3 {
    fn interpolate(tweening: Tweening, start: Vec3, end: Vec3, t: f32, duration: f32) -> Vec3 {
        Vec3::new(
            tweening.apply(t, start.x, end.x, duration),
            tweening.apply(t, start.y, end.y, duration),
            tweening.apply(t, start.z, end.z, duration),
        )
    }
}

impl Interpolate for Vec4 {
    fn interpolate(tweening: Tweening, start: Vec4, end: Vec4, t: f32, duration: f32) -> Vec4 {
        Vec4::new(
            tweening.apply(t, start.x, end.x, duration),
            tweening.apply(t, start.y, end.y, duration),
            tweening.apply(t, start.z, end.z, duration),
            tweening.apply(t, start.w, end.w, duration),
        )
    }
}

impl Interpolate for Color {
    fn interpolate(tweening: Tweening, start: Color, end: Color, t: f32, duration: f32) -> Color {
        Color::new(
            tweening.apply(t, start.r, end.r, duration),
            tweening.apply(t, start.g, end.g, duration),
            tweening.apply(t, start.b, end.b, duration),
            tweening.apply(t, start.a, end.a, duration),
        )
    }
}

/// Interpolate any [`Interpolate`] value
#[inline]
pub fn interpolate<T: Interpolate>(tweening: Tweening, start: T, end: T, t: f32, duration: f32) -> T {
    T::interpolate(tweening, start, end, t, duration)
}

/// Normalized progress `t / duration` clamped to `[0, 1]`
#[inline]
pub fn norm(t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (t / duration).clamp(0.0, 1.0)
}
