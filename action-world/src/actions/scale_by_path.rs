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
//! Scale driven by a sampled path

use crate::actions::repeat::{self, Cycle};
use crate::actions::{
    ensure_duration, ensure_entity, table_bookkeeping, Action, ActionEventBuffer, ActionType,
    InstanceTable,
};
use crate::ecs::channels::{Scale, Type};
use crate::ecs::entity::ID;
use crate::ecs::storage::ChannelArray;
use crate::error::WorldResult;
use crate::path::PathProvider;
use crate::report::ReportWriter;
use crate::tweening::norm;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct ScaleByPath {
    path: Arc<dyn PathProvider>,
    ttl: f32,
    mode: i32,
}

/// Writes `path.sample(timer / ttl)` into the scale channel
///
/// Timing and repeat handling are the same as for
/// [`ScalingAction`](crate::actions::ScalingAction); only the value source
/// differs.
#[derive(Debug, Default)]
pub struct ScaleByPathAction {
    table: InstanceTable<ScaleByPath>,
}

impl ScaleByPathAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a path; the sample at progress 0 is written immediately
    pub fn attach(
        &mut self,
        store: &mut ChannelArray,
        id: ID,
        path: Arc<dyn PathProvider>,
        ttl: f32,
        mode: i32,
    ) -> WorldResult<()> {
        ensure_entity(store, id)?;
        ensure_duration("scale_by_path", ttl)?;
        store.set::<Scale>(id, path.sample(0.0));
        self.table.insert(
            id,
            ScaleByPath {
                path,
                ttl,
                mode: repeat::initial_mode(mode),
            },
        );
        Ok(())
    }
}

impl Action for ScaleByPathAction {
    fn action_type(&self) -> ActionType {
        ActionType::ScaleByPath
    }

    fn name(&self) -> &str {
        "scale_by_path"
    }

    fn update(&mut self, dt: f32, store: &mut ChannelArray, events: &mut ActionEventBuffer) {
        let mut i = 0;
        while i < self.table.len() {
            let (id, timer, s) = self.table.entry_mut(i);
            *timer += dt;
            let value = s.path.sample(norm(*timer, s.ttl));
            if !store.try_set::<Scale>(id, value) {
                self.table.swap_remove(i);
                continue;
            }
            if repeat::advance(&mut s.mode, timer, s.ttl) == Cycle::Finished {
                events.add(id, ActionType::ScaleByPath, store.get::<Type>(id));
                self.table.swap_remove(i);
                continue;
            }
            i += 1;
        }
    }

    fn save_report(&self, writer: &mut dyn ReportWriter) {
        writer.start_box("ScaleByPath");
        writer.start_table(&["ID", "TTL", "Timer", "Mode"]);
        for (id, timer, s) in self.table.iter() {
            writer.start_row();
            writer.add_cell(&id);
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
