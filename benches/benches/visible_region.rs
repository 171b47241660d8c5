// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use lookout_camera::{Camera, Exp2Scale, ScaleModel};

fn bench_visible_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/visible_region");
    let model = Exp2Scale::default();

    // Region derivation is on the refresh path for every camera commit, so
    // it should stay a handful of flops regardless of zoom.
    for zoom in [-800.0, 0.0, 800.0] {
        let mut camera = Camera::new(1920.0, 1080.0, 2.0);
        camera.zoom = zoom;
        camera.offset_x = 123.5;
        camera.offset_y = -67.25;

        group.bench_with_input(BenchmarkId::new("zoom", zoom), &camera, |b, camera| {
            b.iter(|| black_box(camera.visible_region(&model)));
        });
    }

    group.finish();
}

fn bench_scale_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/scale_model");
    let model = Exp2Scale::default();

    group.bench_function("scale_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut zoom = -1600.0;
            while zoom <= 1600.0 {
                acc += model.scale(black_box(zoom));
                zoom += 100.0;
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_world_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/world_at");
    let model = Exp2Scale::default();
    let mut camera = Camera::new(1920.0, 1080.0, 2.0);
    camera.zoom = 400.0;
    camera.offset_x = -250.0;

    let cursors = [
        Point::new(0.0, 0.0),
        Point::new(960.0, 540.0),
        Point::new(1919.0, 1079.0),
    ];
    group.bench_function("three_cursors", |b| {
        b.iter(|| {
            for cursor in cursors {
                black_box(camera.world_at(&model, black_box(cursor)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_visible_region, bench_scale_model, bench_world_at);
criterion_main!(benches);
