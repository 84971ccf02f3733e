// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::race_type::RaceType;
use chrono::{DateTime, Utc};

/// The calendar-facing projection of a race.
///
/// Built from events returned by the calendar service, whose fields may be
/// missing. Missing strings become empty and missing instants become the
/// Unix epoch instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarData {
    pub id: String,
    pub race_type: RaceType,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub description: String,
}

impl CalendarData {
    #[must_use]
    pub fn create(
        id: Option<String>,
        race_type: RaceType,
        title: Option<String>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        location: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            race_type,
            title: title.unwrap_or_default(),
            start_time: start_time.unwrap_or(DateTime::UNIX_EPOCH),
            end_time: end_time.unwrap_or(DateTime::UNIX_EPOCH),
            location: location.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }

    /// Returns whether the event id carries this race type's tag.
    #[must_use]
    pub fn belongs_to_race_type(&self) -> bool {
        self.id.starts_with(self.race_type.tag())
    }
}
