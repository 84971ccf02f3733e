// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar synchronisation for the race schedule backend.
//!
//! Each race type has its own calendar. A race becomes one event whose id
//! is the race id; syncing a race again updates that event in place.
//! Events whose id does not carry the calendar's race-type tag are treated
//! as foreign and are the only ones the delete and cleanse paths remove.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod event;
mod gateway;
mod google;
mod repository;

#[cfg(test)]
mod tests;

pub use config::CalendarConfig;
pub use error::CalendarError;
pub use event::{
    CalendarEvent, EVENT_DURATION_MINUTES, EventDateTime, ExtendedProperties, TIME_ZONE, color_id,
    description, japan_now, location_suffix, race_link, to_japan_time,
};
pub use gateway::{CalendarGateway, InMemoryCalendarGateway};
pub use google::{GOOGLE_CALENDAR_BASE_URL, GoogleCalendarGateway};
pub use repository::{CalendarRepository, GatewayCalendarRepository, SearchCalendarFilter};
