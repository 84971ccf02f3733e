// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::registry::{partition_by_race_type, requested_race_types};
use chrono::{NaiveDate, NaiveDateTime};
use futures::future::join_all;
use race_schedule_calendar::{CalendarError, CalendarRepository, SearchCalendarFilter};
use race_schedule_domain::{CalendarData, RaceEntity, RaceType};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans calendar operations out per race type.
#[derive(Clone)]
pub struct CalendarService {
    calendar_repository: Arc<dyn CalendarRepository>,
}

impl std::fmt::Debug for CalendarService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarService").finish_non_exhaustive()
    }
}

impl CalendarService {
    #[must_use]
    pub fn new(calendar_repository: Arc<dyn CalendarRepository>) -> Self {
        Self {
            calendar_repository,
        }
    }

    /// Lists events for each requested race type. Best effort.
    pub async fn fetch_events(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
    ) -> Vec<CalendarData> {
        let mut calendar_data_list: Vec<CalendarData> = Vec::new();
        for race_type in requested_race_types(race_types) {
            let filter = SearchCalendarFilter::new(race_type, start_date, finish_date);
            match self.calendar_repository.fetch_event_list(&filter).await {
                Ok(events) => {
                    debug!(%race_type, count = events.len(), "Fetched calendar events");
                    calendar_data_list.extend(events);
                }
                Err(err) => {
                    warn!(%race_type, error = %err, "Failed to fetch calendar events");
                    break;
                }
            }
        }
        calendar_data_list
    }

    /// Upserts the events of every race, one parallel batch per race type.
    ///
    /// # Errors
    ///
    /// Returns a `CalendarError::Batch` collecting every failed race once all
    /// batches have finished.
    pub async fn upsert_events(
        &self,
        race_entity_list: Vec<RaceEntity>,
        update_date: NaiveDateTime,
    ) -> Result<(), CoreError> {
        let total: usize = race_entity_list.len();
        let partitions = partition_by_race_type(race_entity_list, RaceEntity::race_type);
        let results: Vec<Result<(), CalendarError>> = join_all(partitions.iter().map(
            |(_, batch)| self.calendar_repository.upsert_events(batch, update_date),
        ))
        .await;
        merge_failures(total, results)
    }

    /// Deletes the candidates that do not carry their race type's tag.
    ///
    /// # Errors
    ///
    /// Returns a `CalendarError::Batch` collecting every failed delete.
    pub async fn delete_events(&self, candidates: Vec<CalendarData>) -> Result<(), CoreError> {
        let total: usize = candidates.len();
        let partitions = partition_by_race_type(candidates, |event| event.race_type);
        let results: Vec<Result<(), CalendarError>> = join_all(
            partitions
                .iter()
                .map(|(_, batch)| self.calendar_repository.delete_events(batch)),
        )
        .await;
        merge_failures(total, results)
    }

    /// Deletes untagged events in range for each requested race type.
    ///
    /// # Errors
    ///
    /// Returns a `CalendarError::Batch` collecting every race type that failed.
    pub async fn cleanse_events(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
    ) -> Result<(), CoreError> {
        let filters: Vec<SearchCalendarFilter> = requested_race_types(race_types)
            .map(|race_type| SearchCalendarFilter::new(race_type, start_date, finish_date))
            .collect();
        let total: usize = filters.len();
        let results: Vec<Result<(), CalendarError>> = join_all(
            filters
                .iter()
                .map(|filter| self.calendar_repository.cleanse_events(filter)),
        )
        .await;
        merge_failures(total, results)
    }
}

/// Flattens per-race-type batch errors into one batch error.
fn merge_failures(
    total: usize,
    results: Vec<Result<(), CalendarError>>,
) -> Result<(), CoreError> {
    let mut failures: Vec<CalendarError> = Vec::new();
    for result in results {
        match result {
            Ok(()) => {}
            Err(CalendarError::Batch {
                failures: batch_failures,
                ..
            }) => failures.extend(batch_failures),
            Err(err) => failures.push(err),
        }
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CalendarError::Batch { total, failures }.into())
    }
}
