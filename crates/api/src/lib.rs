// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    DateRangeSelection, cleanse_calendar, fetch_calendar, fetch_places, fetch_races,
    parse_race_types, parse_selection, split_list, update_calendar, update_places, update_races,
};
pub use request_response::{
    CalendarInfo, ListCalendarResponse, ListPlacesResponse, ListRacesResponse, MessageResponse,
    PlaceInfo, RaceInfo, RacePlayerInfo, RegisterResponse, SearchQuery, UpdateRequest,
};
