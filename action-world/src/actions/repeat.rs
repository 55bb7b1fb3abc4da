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
//! Repeat modes for cyclic actions
//!
//! Scale, scale-axes, scale-by-path and color-flash actions take a signed
//! repeat mode:
//!
//! | mode | behavior |
//! |------|----------|
//! | `< 0` | loop forever |
//! | `0` | run once, then finish |
//! | `n > 0` | run `n` cycles, then finish |
//!
//! The mode is decremented once when the action is attached and again every
//! time a cycle completes, so the counter always holds the number of cycles
//! still to run after the current one.

/// Loop until stopped
pub const LOOP: i32 = -1;

/// Run a single cycle
pub const ONCE: i32 = 0;

/// Outcome of checking a cycle timer against its duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// The current cycle is still running
    Running,
    /// The cycle completed and the timer was rewound for another one
    Restarted,
    /// The last cycle completed; the instance is done
    Finished,
}

/// Mode stored for a freshly attached action
pub fn initial_mode(mode: i32) -> i32 {
    if mode > 0 {
        mode - 1
    } else {
        mode
    }
}

/// Check `timer` against `ttl` and apply the repeat rules
///
/// Rewinds `timer` to zero on restart and decrements a positive `mode`.
pub fn advance(mode: &mut i32, timer: &mut f32, ttl: f32) -> Cycle {
    if *timer < ttl {
        return Cycle::Running;
    }
    match *mode {
        m if m < 0 => {
            *timer = 0.0;
            Cycle::Restarted
        }
        0 => Cycle::Finished,
        _ => {
            *mode -= 1;
            *timer = 0.0;
            Cycle::Restarted
        }
    }
}
