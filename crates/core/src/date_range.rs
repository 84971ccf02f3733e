// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};

/// Rejects a range whose start is after its finish.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateRange` if `start_date > finish_date`.
pub fn validate_date_range(
    start_date: NaiveDate,
    finish_date: NaiveDate,
) -> Result<(), CoreError> {
    if start_date > finish_date {
        return Err(CoreError::InvalidDateRange {
            start_date,
            finish_date,
        });
    }
    Ok(())
}

#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Widens a range to whole calendar months.
///
/// The start moves to the first day of its month and the finish to the last
/// day of its month.
#[must_use]
pub fn normalize_to_months(
    start_date: NaiveDate,
    finish_date: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(start_date), last_day_of_month(finish_date))
}
