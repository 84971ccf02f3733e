// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CalendarError;
use crate::event::CalendarEvent;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::sync::RwLock;

/// Low-level access to a calendar service.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Lists events starting within `[time_min, time_max)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be read.
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    /// Fetches one event, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    async fn try_get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<Option<CalendarEvent>, CalendarError>;

    /// # Errors
    ///
    /// Returns an error if the event cannot be created.
    async fn insert_event(&self, calendar_id: &str, event: &CalendarEvent)
    -> Result<(), CalendarError>;

    /// # Errors
    ///
    /// Returns an error if the event cannot be replaced.
    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &CalendarEvent,
    ) -> Result<(), CalendarError>;

    /// # Errors
    ///
    /// Returns an error if the event cannot be deleted.
    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<(), CalendarError>;
}

/// A calendar kept in memory, keyed by calendar id then event id.
///
/// Used by tests and when no calendar credentials are configured.
/// Individual event ids can be made to fail to exercise partial failures.
#[derive(Debug, Default)]
pub struct InMemoryCalendarGateway {
    calendars: RwLock<HashMap<String, BTreeMap<String, CalendarEvent>>>,
    failing_event_ids: RwLock<HashSet<String>>,
}

impl InMemoryCalendarGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every write to `event_id` fail.
    pub async fn fail_on(&self, event_id: &str) {
        self.failing_event_ids
            .write()
            .await
            .insert(event_id.to_string());
    }

    /// Returns every event of a calendar, ordered by id.
    pub async fn events(&self, calendar_id: &str) -> Vec<CalendarEvent> {
        self.calendars
            .read()
            .await
            .get(calendar_id)
            .map(|events| events.values().cloned().collect())
            .unwrap_or_default()
    }

    async fn check_writable(&self, event_id: &str) -> Result<(), CalendarError> {
        if self.failing_event_ids.read().await.contains(event_id) {
            return Err(CalendarError::Gateway(format!(
                "event {event_id} is not writable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CalendarGateway for InMemoryCalendarGateway {
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let mut events: Vec<CalendarEvent> = self
            .events(calendar_id)
            .await
            .into_iter()
            .filter(|event| {
                event
                    .start_time()
                    .is_some_and(|start| time_min <= start && start < time_max)
            })
            .collect();
        events.sort_by_key(CalendarEvent::start_time);
        Ok(events)
    }

    async fn try_get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<Option<CalendarEvent>, CalendarError> {
        Ok(self
            .calendars
            .read()
            .await
            .get(calendar_id)
            .and_then(|events| events.get(event_id))
            .cloned())
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> Result<(), CalendarError> {
        let event_id: String = event
            .event_id()
            .ok_or_else(|| CalendarError::Gateway(String::from("event has no id")))?
            .to_string();
        self.check_writable(&event_id).await?;
        let mut calendars = self.calendars.write().await;
        let events: &mut BTreeMap<String, CalendarEvent> =
            calendars.entry(calendar_id.to_string()).or_default();
        if events.contains_key(&event_id) {
            return Err(CalendarError::Api {
                status: 409,
                message: format!("event {event_id} already exists"),
            });
        }
        events.insert(event_id, event.clone());
        Ok(())
    }

    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &CalendarEvent,
    ) -> Result<(), CalendarError> {
        self.check_writable(event_id).await?;
        let mut calendars = self.calendars.write().await;
        let stored: &mut CalendarEvent = calendars
            .get_mut(calendar_id)
            .and_then(|events| events.get_mut(event_id))
            .ok_or_else(|| CalendarError::Api {
                status: 404,
                message: format!("event {event_id} not found"),
            })?;
        *stored = event.clone();
        Ok(())
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<(), CalendarError> {
        self.check_writable(event_id).await?;
        self.calendars
            .write()
            .await
            .get_mut(calendar_id)
            .and_then(|events| events.remove(event_id))
            .map(|_| ())
            .ok_or_else(|| CalendarError::Api {
                status: 404,
                message: format!("event {event_id} not found"),
            })
    }
}
