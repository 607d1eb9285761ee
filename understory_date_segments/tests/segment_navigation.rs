// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_date_segments` crate.
//!
//! These walk a navigator over formatter output the way a host would: segments come
//! from a [`PatternFormatter`], keys come in by name, and the caller owns the value.

use chrono::{NaiveDate, NaiveDateTime};
use understory_date_segments::{
    DatePicker, DirectionalKey, FieldStyle, FormatOptions, HourCycle, NavigationResult,
    PatternFormatter, SegmentKind, SegmentNavigator, compute_segments,
};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn all_layouts() -> Vec<FormatOptions> {
    vec![
        FormatOptions::en_us(),
        FormatOptions::en_gb(),
        FormatOptions::iso(),
        FormatOptions::en_us().date_only(),
        FormatOptions::en_gb().time_only(),
        FormatOptions {
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: Some(FieldStyle::Numeric),
            ..FormatOptions::iso()
        },
    ]
}

#[test]
fn requested_fields_always_yield_focusable_segments() {
    let values = [
        dt(2021, 1, 31, 0, 0),
        dt(2000, 2, 29, 12, 0),
        dt(1969, 7, 20, 20, 17),
    ];
    for options in all_layouts() {
        let formatter = PatternFormatter::new(options);
        for value in values {
            let segments = compute_segments(&value, &formatter);
            assert!(
                segments.iter().any(|s| s.kind != SegmentKind::Literal),
                "no focusable segment in {segments:?}"
            );
            // Literals never lead or trail.
            assert!(segments.first().is_some_and(|s| s.is_focusable()));
            assert!(segments.last().is_some_and(|s| s.is_focusable()));
        }
    }
}

#[test]
fn walking_right_visits_every_field_then_stops() {
    let value = dt(2021, 1, 31, 9, 5);
    let mut nav = SegmentNavigator::new();
    nav.set_segments(compute_segments(&value, &PatternFormatter::default()));

    let first = nav.focusable_indices()[0];
    nav.on_segment_focused(first);
    let mut visited = vec![nav.focused_segment().unwrap().kind];
    while let NavigationResult::Moved(_) = nav.on_directional_key(DirectionalKey::Next, value) {
        visited.push(nav.focused_segment().unwrap().kind);
    }

    use SegmentKind::*;
    assert_eq!(
        visited,
        [Month, Day, Year, Hour, Minute, Second, DayPeriod]
    );
}

// Regression: the last focusable segment must report a boundary rather than move
// past the end of the focusable set.
#[test]
fn last_focusable_segment_reports_boundary() {
    let value = dt(2021, 1, 31, 9, 5);
    let mut nav = SegmentNavigator::new();
    nav.set_segments(compute_segments(
        &value,
        &PatternFormatter::new(FormatOptions::iso()),
    ));

    let last = *nav.focusable_indices().last().unwrap();
    nav.on_segment_focused(last);
    assert_eq!(
        nav.on_directional_key(DirectionalKey::Next, value),
        NavigationResult::Boundary
    );
    assert_eq!(nav.focused_index(), Some(last));
}

#[test]
fn first_focusable_segment_reports_boundary() {
    let value = dt(2021, 1, 31, 9, 5);
    let mut nav = SegmentNavigator::new();
    nav.set_segments(compute_segments(&value, &PatternFormatter::default()));

    nav.on_segment_focused(0);
    assert_eq!(
        nav.on_directional_key(DirectionalKey::Previous, value),
        NavigationResult::Boundary
    );
    assert_eq!(nav.focused_index(), Some(0));
}

#[test]
fn month_increment_from_january_31() {
    let mut picker = DatePicker::new(
        dt(2021, 1, 31, 0, 0),
        PatternFormatter::new(FormatOptions::iso().date_only()),
    );
    // "2021" "-" "01" "-" "31"
    picker.segment_focused(2);
    picker.handle_key("ArrowUp");
    assert_eq!(picker.value(), dt(2021, 3, 3, 0, 0));
    picker.handle_key("ArrowDown");
    assert_eq!(picker.value(), dt(2021, 2, 3, 0, 0));
}

#[test]
fn day_period_toggle_is_its_own_inverse() {
    let start = dt(2021, 6, 1, 9, 0);
    let mut picker = DatePicker::new(start, PatternFormatter::default());
    let period = picker
        .segments()
        .iter()
        .position(|s| s.kind == SegmentKind::DayPeriod)
        .unwrap();
    picker.segment_focused(period);

    picker.handle_key("ArrowDown");
    assert_eq!(picker.value(), dt(2021, 6, 1, 21, 0));
    picker.handle_key("ArrowDown");
    assert_eq!(picker.value(), start);
}

#[test]
fn twenty_four_hour_layout_has_no_day_period() {
    let formatter = PatternFormatter::new(FormatOptions {
        hour_cycle: HourCycle::H23,
        ..FormatOptions::en_us()
    });
    let segments = compute_segments(&dt(2021, 6, 1, 21, 0), &formatter);
    assert!(segments.iter().all(|s| s.kind != SegmentKind::DayPeriod));
    assert!(segments.iter().any(|s| s.text == "21"));
}

#[test]
fn hour_rollover_keeps_focus_on_hour() {
    let mut picker = DatePicker::new(
        dt(2021, 12, 31, 23, 0),
        PatternFormatter::new(FormatOptions::iso()),
    );
    let hour = picker
        .segments()
        .iter()
        .position(|s| s.kind == SegmentKind::Hour)
        .unwrap();
    picker.segment_focused(hour);
    picker.handle_key("ArrowUp");

    assert_eq!(picker.text(), "2022-01-01 00:00:00");
    assert_eq!(picker.focused_index(), Some(hour));
}
