// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month grid and the month shown in a picker's calendar dialog.
//!
//! [`MonthGrid`] is the fixed six-week block of dates a calendar table displays for
//! one month. Six rows fit every month regardless of length or starting weekday, so
//! the table never changes height while paging.
//!
//! [`DisplayMonth`] is the month being viewed, independent of the selected value.
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use understory_date_segments::calendar::MonthGrid;
//!
//! // February 2021 starts on a Monday.
//! let grid = MonthGrid::new(2021, 2, Weekday::Sun).unwrap();
//! assert_eq!(grid.first(), NaiveDate::from_ymd_opt(2021, 1, 31).unwrap());
//! assert_eq!(grid.last(), NaiveDate::from_ymd_opt(2021, 3, 13).unwrap());
//! ```

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// Rows in a [`MonthGrid`].
pub const WEEKS: usize = 6;
/// Columns in a [`MonthGrid`].
pub const DAYS_PER_WEEK: usize = 7;

/// Six weeks of dates covering one month.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: [[NaiveDate; DAYS_PER_WEEK]; WEEKS],
}

impl MonthGrid {
    /// Build the grid for `month` (1–12) of `year`, with rows starting on `start_of_week`.
    ///
    /// The first cell is the last `start_of_week` on or before the 1st of the month.
    /// Returns `None` for an invalid month or a grid that leaves the supported date range.
    #[must_use]
    pub fn new(year: i32, month: u32, start_of_week: Weekday) -> Option<Self> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = (first_of_month.weekday().num_days_from_sunday() + 7
            - start_of_week.num_days_from_sunday())
            % 7;
        let mut day = first_of_month.checked_sub_signed(TimeDelta::try_days(i64::from(lead))?)?;

        let mut weeks = [[day; DAYS_PER_WEEK]; WEEKS];
        for (i, cell) in weeks.iter_mut().flatten().enumerate() {
            if i > 0 {
                day = day.succ_opt()?;
            }
            *cell = day;
        }
        Some(Self { year, month, weeks })
    }

    /// Year of the displayed month.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1–12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Rows of dates.
    #[must_use]
    pub fn weeks(&self) -> &[[NaiveDate; DAYS_PER_WEEK]; WEEKS] {
        &self.weeks
    }

    /// Every date in display order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Top-left date.
    #[must_use]
    pub fn first(&self) -> NaiveDate {
        self.weeks[0][0]
    }

    /// Bottom-right date.
    #[must_use]
    pub fn last(&self) -> NaiveDate {
        self.weeks[WEEKS - 1][DAYS_PER_WEEK - 1]
    }

    /// Returns `true` if `date` appears anywhere in the grid.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first()..=self.last()).contains(&date)
    }

    /// Returns `true` if `date` belongs to the displayed month rather than a neighbor.
    #[must_use]
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Row and column of `date`, if shown.
    #[must_use]
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let offset = usize::try_from((date - self.first()).num_days()).ok()?;
        (offset < WEEKS * DAYS_PER_WEEK).then_some((offset / DAYS_PER_WEEK, offset % DAYS_PER_WEEK))
    }
}

/// The month shown in the calendar dialog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayMonth {
    year: i32,
    month: u32,
}

impl DisplayMonth {
    /// Show the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Show `month` (1–12) of `year`. Returns `None` for an invalid month.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Displayed year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1–12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Page back one month.
    pub fn previous_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year = self.year.saturating_sub(1);
        } else {
            self.month -= 1;
        }
    }

    /// Page forward one month.
    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year = self.year.saturating_add(1);
        } else {
            self.month += 1;
        }
    }

    /// Page back one year.
    pub fn previous_year(&mut self) {
        self.year = self.year.saturating_sub(1);
    }

    /// Page forward one year.
    pub fn next_year(&mut self) {
        self.year = self.year.saturating_add(1);
    }

    /// Grid for the displayed month.
    #[must_use]
    pub fn grid(&self, start_of_week: Weekday) -> Option<MonthGrid> {
        MonthGrid::new(self.year, self.month, start_of_week)
    }
}
