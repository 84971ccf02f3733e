// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use race_schedule_calendar::CalendarError;
use race_schedule_domain::DomainError;
use race_schedule_persistence::PersistenceError;

/// Errors that can occur while running a usecase.
#[derive(Debug)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Storage could not be read or written.
    Persistence(PersistenceError),
    /// The calendar could not be synchronised.
    Calendar(CalendarError),
    /// The requested range ends before it starts.
    InvalidDateRange {
        start_date: NaiveDate,
        finish_date: NaiveDate,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Persistence(err) => write!(f, "Persistence error: {err}"),
            Self::Calendar(err) => write!(f, "Calendar error: {err}"),
            Self::InvalidDateRange {
                start_date,
                finish_date,
            } => write!(
                f,
                "Invalid date range: {start_date} is after {finish_date}"
            ),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::Calendar(err) => Some(err),
            Self::InvalidDateRange { .. } => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

impl From<CalendarError> for CoreError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}
