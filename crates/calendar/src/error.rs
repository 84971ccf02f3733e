// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use race_schedule_domain::RaceType;
use thiserror::Error;

/// Errors raised while talking to the calendar service.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Calendar request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The calendar service answered with an error status.
    #[error("Calendar API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The calendar gateway rejected the operation.
    #[error("Calendar gateway error: {0}")]
    Gateway(String),

    /// No calendar is configured for the race type.
    #[error("No calendar configured for race type {0}")]
    MissingCalendarId(RaceType),

    /// Creating or updating the event of a race failed.
    #[error("Failed to upsert calendar event for {race_id} ({name}): {message}")]
    Upsert {
        race_id: String,
        name: String,
        message: String,
    },

    /// Deleting an event failed.
    #[error("Failed to delete calendar event {event_id}: {message}")]
    Delete { event_id: String, message: String },

    /// Some operations of a batch failed; the rest completed.
    #[error("{} of {total} calendar operations failed", .failures.len())]
    Batch {
        total: usize,
        failures: Vec<CalendarError>,
    },
}
