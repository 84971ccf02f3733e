// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Google Calendar API v3 gateway.

use crate::error::CalendarError;
use crate::event::CalendarEvent;
use crate::gateway::CalendarGateway;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const GOOGLE_CALENDAR_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RESULTS: &str = "2500";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventList {
    #[serde(default)]
    items: Vec<CalendarEvent>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// Calendar gateway over the Google Calendar REST API, authenticated with
/// an OAuth bearer token.
#[derive(Debug, Clone)]
pub struct GoogleCalendarGateway {
    http_client: Client,
    base_url: String,
    access_token: String,
}

impl GoogleCalendarGateway {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(access_token: impl Into<String>) -> Result<Self, CalendarError> {
        Self::with_base_url(GOOGLE_CALENDAR_BASE_URL, access_token)
    }

    /// Creates a gateway against another API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, CalendarError> {
        let http_client: Client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    /// Builds `<base>/calendars/<calendar>/events[/<event>]` with every
    /// segment percent-encoded.
    pub(crate) fn events_url(
        &self,
        calendar_id: &str,
        event_id: Option<&str>,
    ) -> Result<Url, CalendarError> {
        let mut url: Url = Url::parse(&self.base_url)
            .map_err(|e| CalendarError::Gateway(format!("invalid base URL: {e}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| CalendarError::Gateway(String::from("base URL cannot have a path")))?;
            segments
                .pop_if_empty()
                .extend(["calendars", calendar_id, "events"]);
            if let Some(event_id) = event_id {
                segments.push(event_id);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CalendarError> {
        let response: Response = request.bearer_auth(&self.access_token).send().await?;
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message: String = response.text().await.unwrap_or_default();
        Err(CalendarError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn rfc3339(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let url: Url = self.events_url(calendar_id, None)?;
        let time_min: String = rfc3339(time_min);
        let time_max: String = rfc3339(time_max);
        let mut events: Vec<CalendarEvent> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = vec![
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
                ("maxResults", MAX_RESULTS),
            ];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }
            let page: EventList = self
                .send(self.http_client.get(url.clone()).query(&query))
                .await?
                .json()
                .await?;
            events.extend(page.items);
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(calendar_id, count = events.len(), "Listed calendar events");
        Ok(events)
    }

    async fn try_get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<Option<CalendarEvent>, CalendarError> {
        let url: Url = self.events_url(calendar_id, Some(event_id))?;
        match self.send(self.http_client.get(url)).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(CalendarError::Api { status: 404 | 410, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> Result<(), CalendarError> {
        let url: Url = self.events_url(calendar_id, None)?;
        self.send(self.http_client.post(url).json(event)).await?;
        Ok(())
    }

    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &CalendarEvent,
    ) -> Result<(), CalendarError> {
        let url: Url = self.events_url(calendar_id, Some(event_id))?;
        self.send(self.http_client.put(url).json(event)).await?;
        Ok(())
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<(), CalendarError> {
        let url: Url = self.events_url(calendar_id, Some(event_id))?;
        self.send(self.http_client.delete(url)).await?;
        Ok(())
    }
}
