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
//! Generalized "change a vector over time" engine
//!
//! Despite the name the engine is not limited to scale: every instance
//! targets one of the vector channels (position, rotation, scale or force)
//! and tweens it between two values, honoring the repeat mode.

use crate::actions::repeat::{self, Cycle};
use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Type, Vec3Channel};
use crate::ecs::components::Vec3;
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::report::ReportWriter;
use crate::tweening::{interpolate, Tweening};

#[derive(Debug, Clone, Copy)]
struct Scaling {
    channel: Vec3Channel,
    start: Vec3,
    end: Vec3,
    ttl: f32,
    mode: i32,
    tweening: Tweening,
}

/// Tweens a vector channel between two values
///
/// # Example
///
/// ```
/// use action_world::actions::{Action, ActionEventBuffer, ScalingAction};
/// use action_world::ecs::channels::{Scale, Vec3Channel};
/// use action_world::ecs::components::Vec3;
/// use action_world::ecs::ChannelArray;
/// use action_world::tweening::Tweening;
///
/// let mut store = ChannelArray::new();
/// let id = store.add();
/// let mut engine = ScalingAction::new();
/// let mut events = ActionEventBuffer::new();
///
/// engine
///     .attach(&mut store, id, Vec3Channel::Scale, Vec3::ONE, Vec3::splat(2.0), 1.0, 0, Tweening::Linear)
///     .unwrap();
/// engine.update(0.5, &mut store, &mut events);
/// assert_eq!(store.get::<Scale>(id), Vec3::splat(1.5));
/// ```
#[derive(Debug, Default)]
pub struct ScalingAction {
    table: InstanceTable<Scaling>,
}

impl ScalingAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tween `channel` of `id` from `start` to `end` over `ttl` seconds
    ///
    /// `start` is written immediately. See [`repeat`](crate::actions::repeat)
    /// for the meaning of `mode`.
    #[allow(clippy::too_many_arguments)]
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        channel: Vec3Channel,
        start: Vec3,
        end: Vec3,
        ttl: f32,
        mode: i32,
        tweening: Tweening,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("scale", ttl)?;
        self.table.insert(
            id,
            Scaling {
                channel,
                start,
                end,
                ttl,
                mode: repeat::initial_mode(mode),
                tweening,
            },
        );
        store.try_set_vec3(id, channel, start);
        Ok(())
    }
}

impl Action for ScalingAction {
    fn action_type(&self) -> ActionType {
        ActionType::Scale
    }

    fn name(&self) -> &str {
        "scale"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let (id, timer, s) = self.table.entry_mut(i);
            *timer += dt;
            let value = interpolate(s.tweening, s.start, s.end, *timer, s.ttl);
            if !store.try_set_vec3(id, s.channel, value) {
                tracing::trace!(%id, "dropping scale for vanished entity");
                self.table.swap_remove(i);
                continue;
            }
            if repeat::advance(&mut s.mode, timer, s.ttl) == Cycle::Finished {
                events.add(id, ActionType::Scale, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("Scale");
        writer.start_table(&["ID", "Channel", "Start", "End", "TTL", "Timer", "Mode"]);
        for (id, timer, s) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
            writer.add_cell(&s.channel.id());
            writer.add_cell(&s.start);
            writer.add_cell(&s.end);
            writer.add_cell(&s.ttl);
            writer.add_cell(&timer);
            writer.add_cell(&s.mode);
            writer.end_row();
        }
        writer.end_table();
        writer.end_box();
    }

    table_bookkeeping!(table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::channels::{Position, Scale};

    fn setup(mode: i32) -> (ChannelArray, ID, ScalingAction) {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = ScalingAction::new();
        engine
            .attach(
                &mut store,
                id,
                Vec3Channel::Scale,
                Vec3::ONE,
                Vec3::splat(3.0),
                1.0,
                mode,
                Tweening::Linear,
            )
            .unwrap();
        (store, id, engine)
    }

    #[test]
    fn test_attach_writes_start() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = ScalingAction::new();
        engine
            .attach(
                &mut store,
                id,
                Vec3Channel::Scale,
                Vec3::splat(0.5),
                Vec3::ONE,
                1.0,
                0,
                Tweening::Linear,
            )
            .unwrap();
        assert_eq!(store.get::<Scale>(id), Vec3::splat(0.5));
    }

    #[test]
    fn test_run_once() {
        let (mut store, id, mut engine) = setup(0);
        let mut events = ActionEventBuffer::new();

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Scale>(id), Vec3::splat(2.0));
        assert!(events.is_empty());

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Scale>(id), Vec3::splat(3.0));
        assert_eq!(events.len(), 1);
        assert!(!engine.contains(id));
    }

    #[test]
    fn test_counted_repeat() {
        let (mut store, id, mut engine) = setup(2);
        let mut events = ActionEventBuffer::new();

        engine.update(1.0, &mut store, &mut events);
        assert!(events.is_empty());
        assert!(engine.contains(id));

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Scale>(id), Vec3::splat(2.0));

        engine.update(0.5, &mut store, &mut events);
        assert_eq!(events.len(), 1);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_loop_never_finishes() {
        let (mut store, id, mut engine) = setup(-1);
        let mut events = ActionEventBuffer::new();
        for _ in 0..40 {
            engine.update(0.25, &mut store, &mut events);
        }
        assert!(events.is_empty());
        assert!(engine.contains(id));
    }

    #[test]
    fn test_other_channel() {
        let mut store = ChannelArray::new();
        let id = store.add();
        let mut engine = ScalingAction::new();
        let mut events = ActionEventBuffer::new();
        engine
            .attach(
                &mut store,
                id,
                Vec3Channel::Position,
                Vec3::ZERO,
                Vec3::new(10.0, 0.0, 0.0),
                2.0,
                0,
                Tweening::Linear,
            )
            .unwrap();
        engine.update(0.5, &mut store, &mut events);
        assert_eq!(store.get::<Position>(id), Vec3::new(2.5, 0.0, 0.0));
    }
}
