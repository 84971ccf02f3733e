// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Synchronisation of races with per-race-type calendars.
//!
//! Upserts and deletes of a batch run concurrently. One failing event never
//! stops its siblings; failures are collected and reported together once
//! every operation has finished.

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::event::{CalendarEvent, to_japan_time};
use crate::gateway::CalendarGateway;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use futures::future::join_all;
use race_schedule_domain::{CalendarData, RaceEntity, RaceType};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Selects one race type's events within an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCalendarFilter {
    pub race_type: RaceType,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
}

impl SearchCalendarFilter {
    #[must_use]
    pub const fn new(race_type: RaceType, start_date: NaiveDate, finish_date: NaiveDate) -> Self {
        Self {
            race_type,
            start_date,
            finish_date,
        }
    }

    /// The half-open instant range covering every day of the filter, in
    /// Japan time.
    #[must_use]
    pub fn time_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start: NaiveDateTime = NaiveDateTime::from(self.start_date);
        let end: NaiveDateTime = NaiveDateTime::from(self.finish_date) + TimeDelta::days(1);
        (
            to_japan_time(start).with_timezone(&Utc),
            to_japan_time(end).with_timezone(&Utc),
        )
    }
}

/// Calendar operations used by the services.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be read.
    async fn fetch_event_list(
        &self,
        filter: &SearchCalendarFilter,
    ) -> Result<Vec<CalendarData>, CalendarError>;

    /// Creates or updates the event of every race.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Batch` naming every race that failed.
    async fn upsert_events(
        &self,
        entities: &[RaceEntity],
        update_date: NaiveDateTime,
    ) -> Result<(), CalendarError>;

    /// Deletes the candidates that do not carry their race type's tag.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Batch` naming every event that failed.
    async fn delete_events(&self, candidates: &[CalendarData]) -> Result<(), CalendarError>;

    /// Deletes untagged events within the filter's range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range cannot be listed or a delete fails.
    async fn cleanse_events(&self, filter: &SearchCalendarFilter) -> Result<(), CalendarError>;
}

fn collect_failures(
    total: usize,
    results: Vec<Result<(), CalendarError>>,
) -> Result<(), CalendarError> {
    let failures: Vec<CalendarError> = results.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CalendarError::Batch { total, failures })
    }
}

/// Calendar repository over a [`CalendarGateway`].
#[derive(Clone)]
pub struct GatewayCalendarRepository {
    gateway: Arc<dyn CalendarGateway>,
    config: CalendarConfig,
}

impl GatewayCalendarRepository {
    #[must_use]
    pub fn new(gateway: Arc<dyn CalendarGateway>, config: CalendarConfig) -> Self {
        Self { gateway, config }
    }

    async fn try_upsert_event(
        &self,
        entity: &RaceEntity,
        update_date: NaiveDateTime,
    ) -> Result<(), CalendarError> {
        let event_id: &str = entity.id().as_str();
        let calendar_id: &str = self.config.calendar_id(entity.race_type())?;
        let event: CalendarEvent = CalendarEvent::from_race_entity(entity, update_date);
        let existing: Option<CalendarEvent> =
            self.gateway.try_get_event(calendar_id, event_id).await?;
        if existing
            .as_ref()
            .and_then(CalendarEvent::event_id)
            .is_some()
        {
            debug!(event_id, "Updating calendar event");
            self.gateway
                .update_event(calendar_id, event_id, &event)
                .await
        } else {
            debug!(event_id, "Creating calendar event");
            self.gateway.insert_event(calendar_id, &event).await
        }
    }

    async fn upsert_event(
        &self,
        entity: &RaceEntity,
        update_date: NaiveDateTime,
    ) -> Result<(), CalendarError> {
        self.try_upsert_event(entity, update_date)
            .await
            .map_err(|e| {
                let race_id: &str = entity.id().as_str();
                let name: &str = entity.race_data().name();
                error!(race_id, name, error = %e, "Calendar upsert failed");
                CalendarError::Upsert {
                    race_id: race_id.to_string(),
                    name: name.to_string(),
                    message: e.to_string(),
                }
            })
    }

    async fn delete_event(&self, event: &CalendarData) -> Result<(), CalendarError> {
        let deleted: Result<(), CalendarError> = match self.config.calendar_id(event.race_type) {
            Ok(calendar_id) => self.gateway.delete_event(calendar_id, &event.id).await,
            Err(e) => Err(e),
        };
        deleted.map_err(|e| {
            error!(event_id = %event.id, error = %e, "Calendar delete failed");
            CalendarError::Delete {
                event_id: event.id.clone(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl CalendarRepository for GatewayCalendarRepository {
    async fn fetch_event_list(
        &self,
        filter: &SearchCalendarFilter,
    ) -> Result<Vec<CalendarData>, CalendarError> {
        let calendar_id: &str = self.config.calendar_id(filter.race_type)?;
        let (time_min, time_max) = filter.time_range();
        let events: Vec<CalendarEvent> = self
            .gateway
            .list_events(calendar_id, time_min, time_max)
            .await?;
        Ok(events
            .iter()
            .map(|event| event.to_calendar_data(filter.race_type))
            .collect())
    }

    async fn upsert_events(
        &self,
        entities: &[RaceEntity],
        update_date: NaiveDateTime,
    ) -> Result<(), CalendarError> {
        if entities.is_empty() {
            debug!("No calendar events to upsert");
            return Ok(());
        }
        let results: Vec<Result<(), CalendarError>> = join_all(
            entities
                .iter()
                .map(|entity| self.upsert_event(entity, update_date)),
        )
        .await;
        info!(count = entities.len(), "Upserted calendar events");
        collect_failures(entities.len(), results)
    }

    async fn delete_events(&self, candidates: &[CalendarData]) -> Result<(), CalendarError> {
        let targets: Vec<&CalendarData> = candidates
            .iter()
            .filter(|event| !event.belongs_to_race_type())
            .collect();
        if targets.is_empty() {
            debug!(
                candidates = candidates.len(),
                "No calendar events to delete"
            );
            return Ok(());
        }
        let results: Vec<Result<(), CalendarError>> =
            join_all(targets.iter().map(|event| self.delete_event(event))).await;
        info!(count = targets.len(), "Deleted calendar events");
        collect_failures(targets.len(), results)
    }

    async fn cleanse_events(&self, filter: &SearchCalendarFilter) -> Result<(), CalendarError> {
        let events: Vec<CalendarData> = self.fetch_event_list(filter).await?;
        self.delete_events(&events).await
    }
}
