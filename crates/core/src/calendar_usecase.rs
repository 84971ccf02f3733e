// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_service::CalendarService;
use crate::date_range::validate_date_range;
use crate::error::CoreError;
use crate::race_service::RaceService;
use crate::registry::DataSource;
use chrono::NaiveDate;
use race_schedule_calendar::japan_now;
use race_schedule_domain::{CalendarData, RaceEntity, RaceType, SearchFilter};
use tracing::info;

/// Keeps the race calendars in step with stored races.
#[derive(Debug, Clone)]
pub struct CalendarUseCase {
    calendar_service: CalendarService,
    race_service: RaceService,
}

impl CalendarUseCase {
    #[must_use]
    pub const fn new(calendar_service: CalendarService, race_service: RaceService) -> Self {
        Self {
            calendar_service,
            race_service,
        }
    }

    /// Lists calendar events in range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateRange` if the range is reversed.
    pub async fn fetch_calendar_data_list(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
    ) -> Result<Vec<CalendarData>, CoreError> {
        validate_date_range(start_date, finish_date)?;
        info!(%start_date, %finish_date, ?race_types, "Fetching calendar events");
        Ok(self
            .calendar_service
            .fetch_events(start_date, finish_date, race_types)
            .await)
    }

    /// Upserts an event for every stored race that passes `display_filter`
    /// and deletes the untagged events in range.
    ///
    /// Only untagged events are deletion candidates. Race ids always carry
    /// their tag, so a tagged event stays even when its race is filtered out.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is reversed or any calendar write
    /// failed. All writes are attempted before the error is returned.
    pub async fn update_calendar_data(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
        display_filter: &SearchFilter,
    ) -> Result<(), CoreError> {
        validate_date_range(start_date, finish_date)?;
        info!(%start_date, %finish_date, ?race_types, "Updating calendar events");
        let race_entity_list: Vec<RaceEntity> = display_filter.apply(
            self.race_service
                .fetch_race_entity_list(
                    start_date,
                    finish_date,
                    race_types,
                    DataSource::Storage,
                    &[],
                )
                .await,
        );
        let calendar_data_list: Vec<CalendarData> = self
            .calendar_service
            .fetch_events(start_date, finish_date, race_types)
            .await;

        let delete_result: Result<(), CoreError> = self
            .calendar_service
            .delete_events(calendar_data_list)
            .await;
        let upsert_result: Result<(), CoreError> = self
            .calendar_service
            .upsert_events(race_entity_list, japan_now())
            .await;
        delete_result.and(upsert_result)
    }

    /// Deletes untagged events in range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is reversed or a delete failed.
    pub async fn cleanse_calendar(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
    ) -> Result<(), CoreError> {
        validate_date_range(start_date, finish_date)?;
        info!(%start_date, %finish_date, ?race_types, "Cleansing calendar events");
        self.calendar_service
            .cleanse_events(start_date, finish_date, race_types)
            .await
    }
}
