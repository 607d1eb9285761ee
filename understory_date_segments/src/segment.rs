// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled pieces of a formatted date/time string.

use alloc::string::String;

/// What a [`DateSegment`] displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// Calendar year.
    Year,
    /// Month of the year.
    Month,
    /// Day of the month.
    Day,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Second of the minute.
    Second,
    /// AM/PM marker.
    DayPeriod,
    /// Day of the week.
    Weekday,
    /// Calendar era.
    Era,
    /// Separator text such as `/`, `:`, or `, `.
    Literal,
}

impl SegmentKind {
    /// Returns `true` for every kind except [`SegmentKind::Literal`].
    #[must_use]
    pub fn is_focusable(self) -> bool {
        !matches!(self, Self::Literal)
    }
}

/// One labeled piece of a formatted date/time string.
///
/// Segments are produced in display order by a
/// [`SegmentFormatter`](crate::SegmentFormatter) and replaced as a whole whenever the
/// value or format changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateSegment {
    /// What this segment displays.
    pub kind: SegmentKind,
    /// Rendered text.
    pub text: String,
}

impl DateSegment {
    /// Create a segment.
    #[must_use]
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a literal separator segment.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Literal, text)
    }

    /// Returns `true` if this segment can take focus.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        self.kind.is_focusable()
    }
}
