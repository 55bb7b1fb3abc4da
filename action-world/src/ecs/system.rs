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
//! Behavior layer boundary
//!
//! Behaviors hold game logic that reacts to the world: they run once per
//! tick after the action engines, and they receive every event when the
//! world drains its event buffer. While a behavior runs it borrows the
//! entity store and the action scheduler through a [`WorldContext`], so it
//! can read entities and attach new actions.

use crate::actions::ActionEvent;
use crate::ecs::scheduler::ActionManager;
use crate::ecs::storage::ChannelArray;

/// Borrowed view of the world handed to [`Behaviors`]
///
/// Only valid for the duration of a single call.
pub struct WorldContext<'a> {
    /// Entity store
    pub store: &'a mut ChannelArray,
    /// Built-in action engines
    pub actions: &'a mut ActionManager,
}

impl<'a> WorldContext<'a> {
    pub(crate) fn new(store: &'a mut ChannelArray, actions: &'a mut ActionManager) -> Self {
        WorldContext { store, actions }
    }
}

/// Game logic driven by the world tick
///
/// Both hooks default to doing nothing.
///
/// # Examples
///
/// ```
/// use action_world::actions::{ActionEvent, ActionType};
/// use action_world::ecs::{Behaviors, WorldContext};
///
/// /// Counts finished movements
/// #[derive(Default)]
/// struct Arrivals(usize);
///
/// impl Behaviors for Arrivals {
///     fn process_event(&mut self, event: &ActionEvent, _ctx: &mut WorldContext<'_>) {
///         if event.action == ActionType::MoveTo {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait Behaviors: Send {
    /// Called once per tick, after the action engines and before force
    /// integration
    fn tick(&mut self, _dt: f32, _ctx: &mut WorldContext<'_>) {}

    /// Called for every event of the tick, after the world resolved removals
    fn process_event(&mut self, _event: &ActionEvent, _ctx: &mut WorldContext<'_>) {}

    /// Name of the behavior for diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Behavior layer that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBehaviors;

impl Behaviors for NoBehaviors {
    fn name(&self) -> &str {
        "none"
    }
}

/// Runs several behaviors in registration order
#[derive(Default)]
pub struct BehaviorSet {
    behaviors: Vec<Box<dyn Behaviors>>,
}

impl BehaviorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a behavior; it runs after the ones added before it
    pub fn add<B: Behaviors + 'static>(&mut self, behavior: B) {
        self.behaviors.push(Box::new(behavior));
    }

    /// Builder form of [`add`](Self::add)
    pub fn with<B: Behaviors + 'static>(mut self, behavior: B) -> Self {
        self.add(behavior);
        self
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

impl Behaviors for BehaviorSet {
    fn tick(&mut self, dt: f32, ctx: &mut WorldContext<'_>) {
        for behavior in &mut self.behaviors {
            behavior.tick(dt, ctx);
        }
    }

    fn process_event(&mut self, event: &ActionEvent, ctx: &mut WorldContext<'_>) {
        for behavior in &mut self.behaviors {
            behavior.process_event(event, ctx);
        }
    }

    fn name(&self) -> &str {
        "set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionType;
    use crate::ecs::components::Rect;
    use crate::ecs::entity::ID;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default, Clone)]
    struct Counter {
        ticks: Arc<AtomicUsize>,
        events: Arc<AtomicUsize>,
    }

    impl Behaviors for Counter {
        fn tick(&mut self, _dt: f32, _ctx: &mut WorldContext<'_>) {
            self.ticks.fetch_add(1, Ordering::Relaxed);
        }

        fn process_event(&mut self, _event: &ActionEvent, _ctx: &mut WorldContext<'_>) {
            self.events.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_behavior_set_forwards_to_all() {
        let mut store = ChannelArray::new();
        let mut actions = ActionManager::new(Rect::default(), false);
        let first = Counter::default();
        let second = Counter::default();
        let mut set = BehaviorSet::new()
            .with(first.clone())
            .with(NoBehaviors)
            .with(second.clone());
        assert_eq!(set.len(), 3);

        let event = ActionEvent {
            id: ID::new(0, 0),
            action: ActionType::Kill,
            entity_type: 0,
        };
        let mut ctx = WorldContext::new(&mut store, &mut actions);
        set.tick(0.5, &mut ctx);
        set.process_event(&event, &mut ctx);
        set.process_event(&event, &mut ctx);

        for counter in [&first, &second] {
            assert_eq!(counter.ticks.load(Ordering::Relaxed), 1);
            assert_eq!(counter.events.load(Ordering::Relaxed), 2);
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        let counter = Counter::default();
        assert!(counter.name().ends_with("Counter"));
        assert_eq!(NoBehaviors.name(), "none");
    }
}
