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
//! Tick-level batch passes over the force channel
//!
//! These passes walk the dense columns of the store directly instead of
//! going through per-entity lookups. With the `parallel` feature they split
//! the columns across the rayon thread pool once the store is large enough
//! to make that worthwhile; the result is identical either way.

use crate::ecs::components::Vec3;
use crate::ecs::storage::ChannelArray;
use crate::ecs::channels::Force;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Entity count below which the parallel passes stay sequential
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Reset the force accumulator of every live entity to zero
pub fn reset_forces(store: &mut ChannelArray) {
    let forces = store.column_mut::<Force>();

    #[cfg(feature = "parallel")]
    {
        if forces.len() >= PARALLEL_THRESHOLD {
            forces.par_iter_mut().for_each(|f| *f = Vec3::ZERO);
            return;
        }
    }

    forces.fill(Vec3::ZERO);
}

/// Integrate the accumulated forces: `position += force` for every live
/// entity, in dense order
///
/// Forces are displacements for this tick; engines that produce them
/// already scale by `dt`. A non-finite force is skipped, and logged when
/// `warn_on_invalid` is set.
///
/// # Returns
///
/// Number of entities whose position was moved
pub fn apply_forces(store: &mut ChannelArray, warn_on_invalid: bool) -> usize {
    let (positions, forces) = store.positions_and_forces_mut();

    #[cfg(feature = "parallel")]
    {
        if positions.len() >= PARALLEL_THRESHOLD {
            return positions
                .par_iter_mut()
                .zip(forces.par_iter())
                .enumerate()
                .map(|(row, (position, force))| integrate(row, position, *force, warn_on_invalid))
                .filter(|moved| *moved)
                .count();
        }
    }

    positions
        .iter_mut()
        .zip(forces.iter())
        .enumerate()
        .map(|(row, (position, force))| integrate(row, position, *force, warn_on_invalid))
        .filter(|moved| *moved)
        .count()
}

/// Move one position; returns whether it changed
#[inline]
fn integrate(row: usize, position: &mut Vec3, force: Vec3, warn_on_invalid: bool) -> bool {
    if force == Vec3::ZERO {
        return false;
    }
    if !force.is_valid() {
        if warn_on_invalid {
            tracing::warn!(row, ?force, "skipping non-finite force");
        }
        return false;
    }
    *position += force;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::channels::Position;

    #[test]
    fn test_reset_forces() {
        let mut store = ChannelArray::new();
        let a = store.add();
        let b = store.add();
        store.set::<Force>(a, Vec3::ONE);
        store.set::<Force>(b, Vec3::new(0.0, -3.0, 0.0));

        reset_forces(&mut store);
        assert_eq!(store.get::<Force>(a), Vec3::ZERO);
        assert_eq!(store.get::<Force>(b), Vec3::ZERO);
    }

    #[test]
    fn test_apply_forces() {
        let mut store = ChannelArray::new();
        let moving = store.add();
        let still = store.add();
        store.set::<Position>(moving, Vec3::new(1.0, 1.0, 0.0));
        store.set::<Force>(moving, Vec3::new(0.5, -1.0, 0.0));
        store.set::<Position>(still, Vec3::new(7.0, 7.0, 0.0));

        assert_eq!(apply_forces(&mut store, true), 1);
        assert_eq!(store.get::<Position>(moving), Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(store.get::<Position>(still), Vec3::new(7.0, 7.0, 0.0));
    }

    #[test]
    fn test_apply_forces_skips_invalid() {
        let mut store = ChannelArray::new();
        let id = store.add();
        store.set::<Force>(id, Vec3::new(f32::NAN, 0.0, 0.0));

        assert_eq!(apply_forces(&mut store, false), 0);
        assert_eq!(store.get::<Position>(id), Vec3::ZERO);
    }

    #[test]
    fn test_empty_store() {
        let mut store = ChannelArray::new();
        reset_forces(&mut store);
        assert_eq!(apply_forces(&mut store, true), 0);
    }
}
