// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect};
use understory_drag::local_point::{PointerSample, TargetFrame};
use understory_drag::{DragController, DragOptions, Restrict};

fn pointer_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.01;
            Point::new(200.0 + 150.0 * t.cos(), 200.0 + 150.0 * t.sin())
        })
        .collect()
}

fn bench_drag_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/moves");

    let plain = TargetFrame::from_bounds(Rect::new(10.0, 10.0, 410.0, 410.0));
    let transformed = TargetFrame::with_transform(
        Rect::new(10.0, 10.0, 410.0, 410.0),
        Affine::translate((10.0, 10.0)) * Affine::rotate(0.3) * Affine::scale(1.5),
    );
    let restrict = Restrict {
        x_min: Some(50.0),
        x_max: Some(300.0),
        y_min: Some(50.0),
        y_max: Some(300.0),
    };

    for len in [256usize, 4_096] {
        let path = pointer_path(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, frame) in [("box", plain), ("transformed", transformed)] {
            group.bench_with_input(BenchmarkId::new(name, len), &path, |b, path| {
                b.iter(|| {
                    let mut drag = DragController::new(DragOptions {
                        restrict,
                        snap_to_pointer: false,
                        ..DragOptions::default()
                    });
                    drag.start(&PointerSample::mouse(path[0], frame), &mut ());
                    for &p in path {
                        black_box(drag.update(&PointerSample::mouse(p, frame), &mut ()));
                    }
                    drag.end(&PointerSample::mouse(path[len - 1], frame), &mut ())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_drag_moves);
criterion_main!(benches);
