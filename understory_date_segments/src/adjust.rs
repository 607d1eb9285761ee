// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step a date value by one unit of a segment's field.
//!
//! Fields roll over the way calendar arithmetic does: adding a day to January 31
//! lands on February 1, and adding a minute to `23:59` moves to the next day.
//!
//! Month and year steps keep the day of the month and let it overflow into the
//! following month when the target month is shorter, so January 31 plus one month
//! is March 3 in 2021 and February 29, 2024 plus one year is March 1, 2025.
//!
//! The day period toggles between AM and PM by moving the hour 12 hours within the
//! same day, whatever the direction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::segment::SegmentKind;

/// Step `value` by `change` units of the field shown by `kind`.
///
/// Returns `None` when the kind cannot be adjusted ([`SegmentKind::Literal`],
/// [`SegmentKind::Era`]) or the result is out of range.
///
/// ```
/// use chrono::NaiveDate;
/// use understory_date_segments::{SegmentKind, adjust};
///
/// let jan31 = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let feb1 = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(adjust(jan31, SegmentKind::Day, 1), Some(feb1));
/// assert_eq!(adjust(jan31, SegmentKind::Era, 1), None);
/// ```
#[must_use]
pub fn adjust(value: NaiveDateTime, kind: SegmentKind, change: i32) -> Option<NaiveDateTime> {
    let change = i64::from(change);
    match kind {
        SegmentKind::Year => add_months(value, change.checked_mul(12)?),
        SegmentKind::Month => add_months(value, change),
        SegmentKind::Day | SegmentKind::Weekday => {
            value.checked_add_signed(TimeDelta::try_days(change)?)
        }
        SegmentKind::Hour => value.checked_add_signed(TimeDelta::try_hours(change)?),
        SegmentKind::Minute => value.checked_add_signed(TimeDelta::try_minutes(change)?),
        SegmentKind::Second => value.checked_add_signed(TimeDelta::try_seconds(change)?),
        SegmentKind::DayPeriod => value.with_hour((value.hour() + 12) % 24),
        SegmentKind::Era => {
            // TODO: decide how era steps should map onto proleptic Gregorian years.
            log::debug!("era adjustment is not supported");
            None
        }
        SegmentKind::Literal => None,
    }
}

/// Add whole months, letting a day past the end of the target month overflow.
fn add_months(value: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let index = i64::from(value.year())
        .checked_mul(12)?
        .checked_add(i64::from(value.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month0 = u32::try_from(index.rem_euclid(12)).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(i64::from(value.day0()))?)?;
    Some(date.and_time(value.time()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn day_rolls_into_next_month() {
        assert_eq!(
            adjust(dt(2021, 1, 31, 0, 0, 0), SegmentKind::Day, 1),
            Some(dt(2021, 2, 1, 0, 0, 0))
        );
        assert_eq!(
            adjust(dt(2021, 3, 1, 0, 0, 0), SegmentKind::Day, -1),
            Some(dt(2021, 2, 28, 0, 0, 0))
        );
    }

    #[test]
    fn weekday_steps_by_day() {
        assert_eq!(
            adjust(dt(2021, 12, 31, 8, 0, 0), SegmentKind::Weekday, 1),
            Some(dt(2022, 1, 1, 8, 0, 0))
        );
    }

    #[test]
    fn month_overflows_short_month() {
        assert_eq!(
            adjust(dt(2021, 1, 31, 10, 0, 0), SegmentKind::Month, 1),
            Some(dt(2021, 3, 3, 10, 0, 0))
        );
        // Leap year: February has 29 days.
        assert_eq!(
            adjust(dt(2020, 1, 31, 10, 0, 0), SegmentKind::Month, 1),
            Some(dt(2020, 3, 2, 10, 0, 0))
        );
    }

    #[test]
    fn month_wraps_year() {
        assert_eq!(
            adjust(dt(2021, 12, 15, 0, 0, 0), SegmentKind::Month, 1),
            Some(dt(2022, 1, 15, 0, 0, 0))
        );
        assert_eq!(
            adjust(dt(2021, 1, 15, 0, 0, 0), SegmentKind::Month, -1),
            Some(dt(2020, 12, 15, 0, 0, 0))
        );
    }

    #[test]
    fn year_from_leap_day() {
        assert_eq!(
            adjust(dt(2024, 2, 29, 0, 0, 0), SegmentKind::Year, 1),
            Some(dt(2025, 3, 1, 0, 0, 0))
        );
        assert_eq!(
            adjust(dt(2024, 2, 29, 0, 0, 0), SegmentKind::Year, 4),
            Some(dt(2028, 2, 29, 0, 0, 0))
        );
    }

    #[test]
    fn time_fields_roll_over() {
        assert_eq!(
            adjust(dt(2021, 1, 31, 23, 0, 0), SegmentKind::Hour, 1),
            Some(dt(2021, 2, 1, 0, 0, 0))
        );
        assert_eq!(
            adjust(dt(2021, 1, 1, 0, 0, 0), SegmentKind::Minute, -1),
            Some(dt(2020, 12, 31, 23, 59, 0))
        );
        assert_eq!(
            adjust(dt(2021, 1, 1, 12, 59, 59), SegmentKind::Second, 1),
            Some(dt(2021, 1, 1, 13, 0, 0))
        );
    }

    #[test]
    fn day_period_toggles_within_day() {
        let morning = dt(2021, 6, 1, 9, 0, 0);
        let evening = dt(2021, 6, 1, 21, 0, 0);
        assert_eq!(adjust(morning, SegmentKind::DayPeriod, 1), Some(evening));
        assert_eq!(adjust(morning, SegmentKind::DayPeriod, -1), Some(evening));
        assert_eq!(adjust(evening, SegmentKind::DayPeriod, 1), Some(morning));
    }

    #[test]
    fn era_and_literal_are_not_adjustable() {
        let v = dt(2021, 6, 1, 9, 0, 0);
        assert_eq!(adjust(v, SegmentKind::Era, 1), None);
        assert_eq!(adjust(v, SegmentKind::Literal, -1), None);
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(adjust(NaiveDateTime::MAX, SegmentKind::Day, 1), None);
        assert_eq!(adjust(NaiveDateTime::MIN, SegmentKind::Year, -1), None);
    }
}
