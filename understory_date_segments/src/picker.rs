// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A date/time picker model that owns its value.
//!
//! [`SegmentNavigator`] deliberately leaves the value with the caller. Most hosts
//! still want one object holding the value, the formatter, the segment focus, and
//! the calendar page, and [`DatePicker`] is that object: it recomputes segments
//! whenever the value or format changes and applies adjustments to itself.
//!
//! ```
//! use chrono::NaiveDate;
//! use understory_date_segments::{DatePicker, FormatOptions, NavigationResult, PatternFormatter};
//!
//! let value = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut picker = DatePicker::new(value, PatternFormatter::new(FormatOptions::en_gb().date_only()));
//! assert_eq!(picker.text(), "31/01/2021");
//!
//! picker.segment_focused(0);
//! assert!(matches!(picker.handle_key("ArrowUp"), NavigationResult::Adjusted(_)));
//! assert_eq!(picker.text(), "01/02/2021");
//! ```

use alloc::string::String;

use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::calendar::{DisplayMonth, MonthGrid};
use crate::format::{PatternFormatter, SegmentFormatter};
use crate::navigator::{DirectionalKey, NavigationResult, SegmentNavigator};
use crate::registry::FocusHandle;
use crate::segment::DateSegment;

/// Value, segments, focus, and calendar page of a date/time picker.
#[derive(Clone, Debug)]
pub struct DatePicker<F = PatternFormatter, H = ()> {
    value: NaiveDateTime,
    formatter: F,
    navigator: SegmentNavigator<H>,
    display: DisplayMonth,
    start_of_week: Weekday,
}

impl<F: SegmentFormatter> DatePicker<F> {
    /// Create a picker for `value` without focus handles.
    #[must_use]
    pub fn new(value: NaiveDateTime, formatter: F) -> Self {
        Self::with_handles(value, formatter)
    }
}

impl<F: SegmentFormatter, H: FocusHandle> DatePicker<F, H> {
    /// Create a picker for `value` whose navigator focuses through registered handles.
    ///
    /// The calendar shows the month of `value`, with weeks starting on Sunday.
    #[must_use]
    pub fn with_handles(value: NaiveDateTime, formatter: F) -> Self {
        let mut navigator = SegmentNavigator::with_handles();
        navigator.set_segments(formatter.format_to_segments(&value));
        Self {
            value,
            formatter,
            navigator,
            display: DisplayMonth::of(value.date()),
            start_of_week: Weekday::Sun,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    /// Replace the value and recompute segments.
    ///
    /// The calendar page is left where it is.
    pub fn set_value(&mut self, value: NaiveDateTime) {
        self.value = value;
        self.refresh();
    }

    /// Select a day from the calendar, keeping the time of day.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.set_value(date.and_time(self.value.time()));
    }

    /// The formatter.
    #[must_use]
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Replace the formatter and recompute segments.
    pub fn set_formatter(&mut self, formatter: F) {
        self.formatter = formatter;
        self.refresh();
    }

    /// Current segments.
    #[must_use]
    pub fn segments(&self) -> &[DateSegment] {
        self.navigator.segments()
    }

    /// The value as displayed.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments().iter().map(|s| s.text.as_str()).collect()
    }

    /// Index of the focused segment.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.navigator.focused_index()
    }

    /// The segment navigator.
    #[must_use]
    pub fn navigator(&self) -> &SegmentNavigator<H> {
        &self.navigator
    }

    /// The segment navigator, mutably, for registering focus handles.
    pub fn navigator_mut(&mut self) -> &mut SegmentNavigator<H> {
        &mut self.navigator
    }

    /// A segment received focus. See [`SegmentNavigator::on_segment_focused`].
    pub fn segment_focused(&mut self, index: usize) -> bool {
        self.navigator.on_segment_focused(index)
    }

    /// Focus left the picker.
    pub fn blur(&mut self) {
        self.navigator.on_blur();
    }

    /// Handle a key by name (`ArrowLeft`, `ArrowRight`, `ArrowUp`, `ArrowDown`).
    ///
    /// Other keys return [`NavigationResult::Unchanged`].
    pub fn handle_key(&mut self, key: &str) -> NavigationResult {
        match DirectionalKey::from_key(key) {
            Some(key) => self.handle_directional_key(key),
            None => NavigationResult::Unchanged,
        }
    }

    /// Handle a directional key, applying any adjustment to the value.
    pub fn handle_directional_key(&mut self, key: DirectionalKey) -> NavigationResult {
        let result = self.navigator.on_directional_key(key, self.value);
        if let NavigationResult::Adjusted(value) = result {
            log::debug!("picker value adjusted to {value}");
            self.set_value(value);
        }
        result
    }

    /// First day of the calendar week.
    #[must_use]
    pub fn start_of_week(&self) -> Weekday {
        self.start_of_week
    }

    /// Set the first day of the calendar week.
    pub fn set_start_of_week(&mut self, start_of_week: Weekday) {
        self.start_of_week = start_of_week;
    }

    /// The month shown in the calendar.
    #[must_use]
    pub fn display(&self) -> DisplayMonth {
        self.display
    }

    /// The month shown in the calendar, for paging.
    pub fn display_mut(&mut self) -> &mut DisplayMonth {
        &mut self.display
    }

    /// Page the calendar back to the month of the current value.
    pub fn show_value(&mut self) {
        self.display = DisplayMonth::of(self.value.date());
    }

    /// Grid for the displayed month.
    #[must_use]
    pub fn month_grid(&self) -> Option<MonthGrid> {
        self.display.grid(self.start_of_week)
    }

    fn refresh(&mut self) {
        self.navigator
            .set_segments(self.formatter.format_to_segments(&self.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatOptions;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn picker() -> DatePicker {
        DatePicker::new(dt(2021, 1, 31, 9, 30), PatternFormatter::default())
    }

    #[test]
    fn initial_segments_follow_value() {
        let p = picker();
        assert_eq!(p.text(), "01/31/2021, 09:30:00 AM");
        assert_eq!(p.focused_index(), None);
        assert_eq!((p.display().year(), p.display().month()), (2021, 1));
    }

    #[test]
    fn keys_adjust_owned_value() {
        let mut p = picker();
        p.segment_focused(2);
        assert_eq!(
            p.handle_key("ArrowUp"),
            NavigationResult::Adjusted(dt(2021, 2, 1, 9, 30))
        );
        assert_eq!(p.value(), dt(2021, 2, 1, 9, 30));
        assert_eq!(p.text(), "02/01/2021, 09:30:00 AM");
        // Same layout, so focus survives the refresh.
        assert_eq!(p.focused_index(), Some(2));
    }

    #[test]
    fn unknown_keys_are_unchanged() {
        let mut p = picker();
        p.segment_focused(0);
        assert_eq!(p.handle_key("Enter"), NavigationResult::Unchanged);
        assert_eq!(p.value(), dt(2021, 1, 31, 9, 30));
    }

    #[test]
    fn arrows_walk_segments() {
        let mut p = picker();
        p.segment_focused(0);
        assert_eq!(p.handle_key("ArrowRight"), NavigationResult::Moved(2));
        assert_eq!(p.handle_key("ArrowLeft"), NavigationResult::Moved(0));
        assert_eq!(p.handle_key("ArrowLeft"), NavigationResult::Boundary);
    }

    #[test]
    fn day_period_round_trip() {
        let mut p = picker();
        let period = p.segments().len() - 1;
        p.segment_focused(period);
        p.handle_key("ArrowUp");
        assert_eq!(p.value(), dt(2021, 1, 31, 21, 30));
        assert!(p.text().ends_with("PM"));
        p.handle_key("ArrowUp");
        assert_eq!(p.value(), dt(2021, 1, 31, 9, 30));
    }

    #[test]
    fn changing_format_replaces_segments() {
        let mut p = picker();
        p.segment_focused(12);
        p.set_formatter(PatternFormatter::new(FormatOptions::iso().date_only()));
        assert_eq!(p.text(), "2021-01-31");
        assert_eq!(p.focused_index(), None);
    }

    #[test]
    fn changing_format_drops_handles_of_removed_fields() {
        fn noop() {}
        let mut p = DatePicker::<PatternFormatter, fn()>::with_handles(
            dt(2021, 1, 31, 9, 30),
            PatternFormatter::default(),
        );
        // en_us: index 4 is the year, index 6 the hour.
        assert!(p.navigator_mut().register_handle(4, noop));
        assert!(p.navigator_mut().register_handle(6, noop));

        // iso date-only: "2021" "-" "01" "-" "31".
        p.set_formatter(PatternFormatter::new(FormatOptions::iso().date_only()));
        assert!(p.navigator().handles().contains(4));
        assert!(!p.navigator().handles().contains(6));
        p.segment_focused(2);
        assert_eq!(p.handle_key("ArrowLeft"), NavigationResult::Moved(0));
    }

    #[test]
    fn select_date_keeps_time() {
        let mut p = picker();
        p.select_date(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
        assert_eq!(p.value(), dt(2021, 3, 14, 9, 30));
        // The calendar page does not follow the value until asked.
        assert_eq!(p.display().month(), 1);
        p.show_value();
        assert_eq!(p.display().month(), 3);
    }

    #[test]
    fn month_grid_follows_paging_and_week_start() {
        let mut p = picker();
        p.display_mut().next_month();
        p.set_start_of_week(Weekday::Mon);
        let grid = p.month_grid().unwrap();
        assert_eq!(grid.month(), 2);
        assert_eq!(grid.first(), NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
    }
}
