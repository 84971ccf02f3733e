// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CalendarError;
use race_schedule_domain::RaceType;
use std::collections::HashMap;

/// Maps each race type to the calendar its events live in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarConfig {
    calendar_ids: HashMap<RaceType, String>,
}

impl CalendarConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar of a race type.
    #[must_use]
    pub fn with_calendar(mut self, race_type: RaceType, calendar_id: impl Into<String>) -> Self {
        self.calendar_ids.insert(race_type, calendar_id.into());
        self
    }

    /// Returns the calendar of a race type.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::MissingCalendarId` if none is configured.
    pub fn calendar_id(&self, race_type: RaceType) -> Result<&str, CalendarError> {
        self.calendar_ids
            .get(&race_type)
            .map(String::as_str)
            .ok_or(CalendarError::MissingCalendarId(race_type))
    }

    #[must_use]
    pub fn is_configured(&self, race_type: RaceType) -> bool {
        self.calendar_ids.contains_key(&race_type)
    }
}
