// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_date_segments::{DatePicker, FormatOptions, PatternFormatter};

fn bench_key_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments/key_repeat");
    let Some(start) = NaiveDate::from_ymd_opt(2021, 1, 31).and_then(|d| d.and_hms_opt(9, 0, 0))
    else {
        return;
    };

    // Holding an arrow key on one field: every press reformats the whole value.
    for (name, options) in [
        ("en_us", FormatOptions::en_us()),
        ("iso_date", FormatOptions::iso().date_only()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut picker = DatePicker::new(start, PatternFormatter::new(options.clone()));
                picker.segment_focused(2);
                for _ in 0..64 {
                    black_box(picker.handle_key("ArrowUp"));
                }
                for _ in 0..8 {
                    black_box(picker.handle_key("ArrowRight"));
                }
                picker.value()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_repeat);
criterion_main!(benches);
