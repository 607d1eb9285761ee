// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_date_segments --heading-base-level=0

//! Understory Date Segments: keyboard editing of formatted dates.
//!
//! A date/time field such as `01/31/2021, 09:30:00 AM` is shown as a row of
//! **segments**: editable fields (month, day, year, hour, ...) separated by literal
//! text. This crate models that row and the keyboard interaction over it:
//!
//! - [`segment`]: [`DateSegment`] and [`SegmentKind`].
//! - [`format`]: the [`SegmentFormatter`] seam that turns a value into segments, plus the
//!   built-in [`PatternFormatter`].
//! - [`navigator`]: [`SegmentNavigator`], which tracks the focused segment and maps
//!   directional keys to focus moves or value adjustments.
//! - [`adjust`](mod@adjust): calendar-correct stepping of a single field.
//! - [`registry`]: [`FocusRegistry`], index-addressed handles the navigator calls to move
//!   native focus.
//! - [`calendar`]: the six-week [`MonthGrid`](calendar::MonthGrid) and the paged
//!   [`DisplayMonth`](calendar::DisplayMonth) of a calendar dialog.
//! - [`picker`]: [`DatePicker`], which bundles all of the above around an owned value.
//!
//! Nothing here renders. Hosts draw one element per segment, forward focus, blur, and
//! key events, and read back the focused index and the new value.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_date_segments::{
//!     DirectionalKey, NavigationResult, PatternFormatter, SegmentKind, SegmentNavigator,
//!     compute_segments,
//! };
//!
//! let value = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let segments = compute_segments(&value, &PatternFormatter::default());
//!
//! let mut nav = SegmentNavigator::new();
//! nav.set_segments(segments);
//!
//! // Focus the day and step it past the end of January.
//! let day = nav.segments().iter().position(|s| s.kind == SegmentKind::Day).unwrap();
//! nav.on_segment_focused(day);
//! let feb1 = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert_eq!(
//!     nav.on_directional_key(DirectionalKey::Increment, value),
//!     NavigationResult::Adjusted(feb1),
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `chrono`.
//! - `serde`: `Serialize`/`Deserialize` for [`DateSegment`] and [`SegmentKind`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adjust;
pub mod calendar;
pub mod format;
pub mod navigator;
pub mod picker;
pub mod registry;
pub mod segment;

pub use adjust::adjust;
pub use format::{
    DateOrder, FieldStyle, FormatOptions, HourCycle, MonthStyle, PatternFormatter,
    SegmentFormatter, TextStyle, compute_segments,
};
pub use navigator::{DirectionalKey, NavigationResult, SegmentNavigator};
pub use picker::DatePicker;
pub use registry::{FocusHandle, FocusRegistry};
pub use segment::{DateSegment, SegmentKind};
