// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use lookout_camera::{Camera, Exp2Scale, VisibleRegion};
use lookout_controller::{CommittedCamera, SpatialIndex, ViewportController};
use lookout_debounce::Debounce;

/// Brute-force index over a `side x side` grid of 10-unit cells.
struct GridIndex {
    cells: Vec<(u32, Rect)>,
}

impl GridIndex {
    fn with_side(side: u32) -> Self {
        let mut cells = Vec::with_capacity((side * side) as usize);
        for id in 0..side * side {
            let x = f64::from(id % side) * 10.0;
            let y = f64::from(id / side) * 10.0;
            cells.push((id, Rect::new(x, y, x + 10.0, y + 10.0)));
        }
        Self { cells }
    }
}

impl SpatialIndex for GridIndex {
    fn query_into(&mut self, region: &VisibleRegion, out: &mut Vec<u32>) {
        for (id, cell) in &self.cells {
            if 10.0 >= region.min_z && cell.intersect(region.bounds).area() > 0.0 {
                out.push(*id);
            }
        }
    }
}

fn pumped_controller(side: u32) -> ViewportController<Exp2Scale, GridIndex> {
    let camera = Camera::new(1920.0, 1080.0, 1.0);
    let mut controller =
        ViewportController::new(Exp2Scale::default(), GridIndex::with_side(side), camera);
    controller.sync_committed(CommittedCamera::from(camera), 0);
    controller
}

fn bench_event_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/event_storm");

    // Hypothesis: pumping events stays cheap because the debounce batches
    // the O(entities) queries; cost grows with index size far slower than
    // with event count.
    let events = 1_000u64;
    for side in [32u32, 128] {
        group.throughput(Throughput::Elements(events));

        group.bench_with_input(
            BenchmarkId::new("wheel_and_drag", side),
            &side,
            |b, &side| {
                b.iter_batched(
                    || pumped_controller(side),
                    |mut controller| {
                        let cursor = Point::new(700.0, 400.0);
                        for t in 0..events {
                            let now = 1 + t;
                            controller.poll(now);
                            match t % 4 {
                                0 => {
                                    let delta = ((t % 8) as f64) - 4.0;
                                    controller.zoom_by_wheel(delta, cursor, now);
                                }
                                1 => controller.pointer_down(),
                                2 => controller.pointer_move(Vec2::new(3.0, -2.0)),
                                _ => {
                                    controller.pointer_up(now);
                                }
                            }
                        }
                        black_box(controller.refresh_revision());
                        black_box(controller.visible_ids().len());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_forced_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/request_refresh");

    // One immediate query per iteration: the cost is the index scan plus a
    // constant sliver of controller bookkeeping.
    for side in [32u32, 128, 512] {
        let entities = u64::from(side) * u64::from(side);
        group.throughput(Throughput::Elements(entities));

        group.bench_with_input(BenchmarkId::new("grid", side), &side, |b, &side| {
            b.iter_batched(
                || pumped_controller(side),
                |mut controller| {
                    // Past the settle window, so this queries on the spot.
                    controller.request_refresh(1_000);
                    black_box(controller.visible_ids().len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_debounce_pump(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce/pump");

    let calls = 10_000u64;
    group.throughput(Throughput::Elements(calls));

    group.bench_function("call_poll_cycle", |b| {
        b.iter_batched(
            || Debounce::<u64>::new(100, 200),
            |mut debounce| {
                let mut fired = 0u64;
                for now in 0..calls {
                    if debounce.call(now, now).is_some() {
                        fired += 1;
                    }
                    if debounce.poll(now).is_some() {
                        fired += 1;
                    }
                }
                black_box(fired)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_event_storm,
    bench_forced_refresh,
    bench_debounce_pump
);
criterion_main!(benches);
