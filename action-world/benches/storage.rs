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
//! Benchmarks for the entity store
//!
//! These benchmarks measure:
//! - Entity creation, including column growth
//! - Random-order removal with swap compaction
//! - Channel reads through identifiers versus a dense column scan

use action_world::ecs::channels::Position;
use action_world::ecs::components::Vec3;
use action_world::ecs::{ChannelArray, ID};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [100, 1000, 10000];

fn populated(count: usize) -> (ChannelArray, Vec<ID>) {
    let mut store = ChannelArray::with_capacity(count);
    let ids = (0..count)
        .map(|i| {
            let id = store.add();
            store.set::<Position>(id, Vec3::new(i as f32, i as f32 * 2.0, 0.0));
            id
        })
        .collect();
    (store, ids)
}

fn bench_store_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_add");

    for count in SIZES {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("presized", count), &count, |b, &count| {
            b.iter(|| black_box(populated(count)));
        });
        group.bench_with_input(BenchmarkId::new("growing", count), &count, |b, &count| {
            b.iter(|| {
                let mut store = ChannelArray::with_capacity(1);
                for _ in 0..count {
                    black_box(store.add());
                }
                black_box(store);
            });
        });
    }

    group.finish();
}

fn bench_store_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_remove");

    for count in SIZES {
        group.throughput(Throughput::Elements(count as u64 / 2));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || populated(count),
                |(mut store, ids)| {
                    for id in ids.iter().step_by(2) {
                        store.remove(*id);
                    }
                    black_box(store);
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_store_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_read");

    for count in SIZES {
        let (store, ids) = populated(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("by_id", count), &ids, |b, ids| {
            b.iter(|| {
                let sum = ids
                    .iter()
                    .fold(Vec3::ZERO, |acc, id| acc + store.get::<Position>(*id));
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("column", count), &store, |b, store| {
            b.iter(|| {
                let sum = store
                    .column::<Position>()
                    .iter()
                    .fold(Vec3::ZERO, |acc, p| acc + *p);
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store_add, bench_store_remove, bench_store_read);
criterion_main!(benches);
