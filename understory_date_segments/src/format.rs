// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a date value into an ordered sequence of [`DateSegment`]s.
//!
//! Navigation only needs the segment sequence, not the rules that produced it, so
//! formatting sits behind the [`SegmentFormatter`] trait. Hosts with a full
//! internationalization stack can implement it directly. [`PatternFormatter`] is a
//! small built-in formatter driven by [`FormatOptions`], with presets for a few
//! common layouts.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use understory_date_segments::{FormatOptions, PatternFormatter, SegmentFormatter};
//!
//! let value = NaiveDate::from_ymd_opt(2021, 1, 31)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 7)
//!     .unwrap();
//!
//! let us = PatternFormatter::new(FormatOptions::en_us());
//! assert_eq!(us.format_to_string(&value), "01/31/2021, 09:05:07 AM");
//!
//! let iso = PatternFormatter::new(FormatOptions::iso());
//! assert_eq!(iso.format_to_string(&value), "2021-01-31 09:05:07");
//! ```

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, NaiveDateTime};

use crate::segment::{DateSegment, SegmentKind};

/// A formatting service that splits a date value into labeled segments.
///
/// Implementations must be deterministic: the same value and configuration always
/// yield the same number and order of segments.
pub trait SegmentFormatter {
    /// Format `value` into display-ordered segments.
    fn format_to_segments(&self, value: &NaiveDateTime) -> Vec<DateSegment>;

    /// Format `value` into a single string by concatenating segment text.
    fn format_to_string(&self, value: &NaiveDateTime) -> String {
        self.format_to_segments(value)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }
}

impl<F: SegmentFormatter + ?Sized> SegmentFormatter for &F {
    fn format_to_segments(&self, value: &NaiveDateTime) -> Vec<DateSegment> {
        (**self).format_to_segments(value)
    }
}

/// Compute the segments of `value` using `formatter`.
#[must_use]
pub fn compute_segments<F>(value: &NaiveDateTime, formatter: &F) -> Vec<DateSegment>
where
    F: SegmentFormatter + ?Sized,
{
    formatter.format_to_segments(value)
}

/// Display of a numeric field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldStyle {
    /// No padding (`7`, `2021`).
    Numeric,
    /// Zero padded to two digits; years keep only their last two digits (`07`, `21`).
    TwoDigit,
}

/// Display of the month field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MonthStyle {
    /// `1`
    Numeric,
    /// `01`
    TwoDigit,
    /// `Jan`
    Short,
    /// `January`
    Long,
}

/// Display of a named field such as the weekday or era.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// `Sun`, `AD`
    Short,
    /// `Sunday`, `Anno Domini`
    Long,
}

/// 12- or 24-hour clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HourCycle {
    /// `1`–`12` with an AM/PM day-period segment.
    H12,
    /// `0`–`23`.
    H23,
}

/// Order of the year, month and day fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// `month/day/year`
    MonthDayYear,
    /// `day/month/year`
    DayMonthYear,
    /// `year-month-day`
    YearMonthDay,
}

/// Layout and field selection for [`PatternFormatter`].
///
/// A field set to `None` is not displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Order of the date fields.
    pub order: DateOrder,
    /// Clock used for the hour field.
    pub hour_cycle: HourCycle,
    /// Between date fields.
    pub date_separator: Cow<'static, str>,
    /// Between time fields.
    pub time_separator: Cow<'static, str>,
    /// Between the date part and the time part.
    pub date_time_separator: Cow<'static, str>,
    /// Year field.
    pub year: Option<FieldStyle>,
    /// Month field.
    pub month: Option<MonthStyle>,
    /// Day field.
    pub day: Option<FieldStyle>,
    /// Hour field.
    pub hour: Option<FieldStyle>,
    /// Minute field.
    pub minute: Option<FieldStyle>,
    /// Second field.
    pub second: Option<FieldStyle>,
    /// Weekday, shown before the date.
    pub weekday: Option<TextStyle>,
    /// Era, shown after the date.
    pub era: Option<TextStyle>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FormatOptions {
    /// US English: `01/31/2021, 09:05:07 AM`.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            order: DateOrder::MonthDayYear,
            hour_cycle: HourCycle::H12,
            date_separator: Cow::Borrowed("/"),
            time_separator: Cow::Borrowed(":"),
            date_time_separator: Cow::Borrowed(", "),
            year: Some(FieldStyle::Numeric),
            month: Some(MonthStyle::TwoDigit),
            day: Some(FieldStyle::TwoDigit),
            hour: Some(FieldStyle::TwoDigit),
            minute: Some(FieldStyle::TwoDigit),
            second: Some(FieldStyle::TwoDigit),
            weekday: None,
            era: None,
        }
    }

    /// British English: `31/01/2021, 09:05:07`.
    #[must_use]
    pub fn en_gb() -> Self {
        Self {
            order: DateOrder::DayMonthYear,
            hour_cycle: HourCycle::H23,
            ..Self::en_us()
        }
    }

    /// ISO 8601 style: `2021-01-31 09:05:07`.
    #[must_use]
    pub fn iso() -> Self {
        Self {
            order: DateOrder::YearMonthDay,
            hour_cycle: HourCycle::H23,
            date_separator: Cow::Borrowed("-"),
            date_time_separator: Cow::Borrowed(" "),
            ..Self::en_us()
        }
    }

    /// Keep only the date fields of `self`.
    #[must_use]
    pub fn date_only(self) -> Self {
        Self {
            hour: None,
            minute: None,
            second: None,
            ..self
        }
    }

    /// Keep only the time fields of `self`.
    #[must_use]
    pub fn time_only(self) -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            weekday: None,
            era: None,
            ..self
        }
    }
}

/// Built-in [`SegmentFormatter`] driven by [`FormatOptions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternFormatter {
    options: FormatOptions,
}

impl PatternFormatter {
    /// Create a formatter with the given options.
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

/// Appends fields, inserting `sep` between consecutive ones.
struct Joiner<'a> {
    out: &'a mut Vec<DateSegment>,
    sep: &'a str,
    any: bool,
}

impl Joiner<'_> {
    fn push(&mut self, kind: SegmentKind, text: String) {
        if self.any {
            self.out.push(DateSegment::literal(self.sep));
        }
        self.out.push(DateSegment::new(kind, text));
        self.any = true;
    }
}

impl SegmentFormatter for PatternFormatter {
    fn format_to_segments(&self, value: &NaiveDateTime) -> Vec<DateSegment> {
        let o = &self.options;
        let mut out = Vec::new();

        if let Some(style) = o.weekday {
            let spec = match style {
                TextStyle::Short => "%a",
                TextStyle::Long => "%A",
            };
            out.push(DateSegment::new(SegmentKind::Weekday, field(value, spec)));
        }

        let date_start = out.len();
        {
            let mut date = Joiner {
                out: &mut out,
                sep: &o.date_separator,
                any: false,
            };
            let year = o.year.map(|s| {
                let spec = match s {
                    FieldStyle::Numeric => "%Y",
                    FieldStyle::TwoDigit => "%y",
                };
                (SegmentKind::Year, field(value, spec))
            });
            let month = o.month.map(|s| {
                let spec = match s {
                    MonthStyle::Numeric => "%-m",
                    MonthStyle::TwoDigit => "%m",
                    MonthStyle::Short => "%b",
                    MonthStyle::Long => "%B",
                };
                (SegmentKind::Month, field(value, spec))
            });
            let day = o
                .day
                .map(|s| (SegmentKind::Day, field(value, numeric(s, "%-d", "%d"))));
            let fields = match o.order {
                DateOrder::MonthDayYear => [month, day, year],
                DateOrder::DayMonthYear => [day, month, year],
                DateOrder::YearMonthDay => [year, month, day],
            };
            for (kind, text) in fields.into_iter().flatten() {
                date.push(kind, text);
            }
        }
        if let Some(style) = o.era {
            if out.len() > date_start {
                out.push(DateSegment::literal(" "));
            }
            out.push(DateSegment::new(SegmentKind::Era, era_name(value.year(), style)));
        }
        if o.weekday.is_some() && out.len() > date_start {
            out.insert(date_start, DateSegment::literal(", "));
        }

        let has_time = o.hour.is_some() || o.minute.is_some() || o.second.is_some();
        if has_time && !out.is_empty() {
            out.push(DateSegment::literal(&*o.date_time_separator));
        }
        {
            let mut time = Joiner {
                out: &mut out,
                sep: &o.time_separator,
                any: false,
            };
            if let Some(style) = o.hour {
                let spec = match o.hour_cycle {
                    HourCycle::H23 => numeric(style, "%-H", "%H"),
                    HourCycle::H12 => numeric(style, "%-I", "%I"),
                };
                time.push(SegmentKind::Hour, field(value, spec));
            }
            if let Some(style) = o.minute {
                time.push(SegmentKind::Minute, field(value, numeric(style, "%-M", "%M")));
            }
            if let Some(style) = o.second {
                time.push(SegmentKind::Second, field(value, numeric(style, "%-S", "%S")));
            }
        }
        if o.hour.is_some() && o.hour_cycle == HourCycle::H12 {
            out.push(DateSegment::literal(" "));
            out.push(DateSegment::new(SegmentKind::DayPeriod, field(value, "%p")));
        }

        out
    }
}

/// Render one field of `value` with a strftime specifier.
fn field(value: &NaiveDateTime, spec: &str) -> String {
    format!("{}", value.format(spec))
}

fn numeric(style: FieldStyle, unpadded: &'static str, padded: &'static str) -> &'static str {
    match style {
        FieldStyle::Numeric => unpadded,
        FieldStyle::TwoDigit => padded,
    }
}

// strftime has no era specifier.
fn era_name(year: i32, style: TextStyle) -> &'static str {
    // Proleptic Gregorian: year 0 is 1 BC.
    match (year > 0, style) {
        (true, TextStyle::Short) => "AD",
        (false, TextStyle::Short) => "BC",
        (true, TextStyle::Long) => "Anno Domini",
        (false, TextStyle::Long) => "Before Christ",
    }
}
