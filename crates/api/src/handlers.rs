// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Controller functions: DTOs in, usecase calls, DTOs out.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CalendarInfo, ListCalendarResponse, ListPlacesResponse, ListRacesResponse, MessageResponse,
    PlaceInfo, RaceInfo, RegisterResponse, SearchQuery, UpdateRequest,
};
use chrono::NaiveDate;
use race_schedule::{CalendarUseCase, PlaceUseCase, RaceUseCase};
use race_schedule_domain::{RaceType, SearchFilter, parse_date};
use std::str::FromStr;
use tracing::debug;

/// A validated date range and race type selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSelection {
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
    pub race_types: Vec<RaceType>,
}

/// Splits a comma-separated list, dropping blank entries.
#[must_use]
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parses race type names; an empty list selects every race type.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `raceType` for an unknown name.
pub fn parse_race_types(values: &[String]) -> Result<Vec<RaceType>, ApiError> {
    if values.is_empty() {
        return Ok(RaceType::ALL.to_vec());
    }
    values
        .iter()
        .map(|value| RaceType::from_str(value).map_err(translate_domain_error))
        .collect()
}

/// Parses the dates and race types of a request.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a date or race type cannot be parsed.
pub fn parse_selection(
    start_date: &str,
    finish_date: &str,
    race_types: &[String],
) -> Result<DateRangeSelection, ApiError> {
    Ok(DateRangeSelection {
        start_date: parse_date("startDate", start_date).map_err(translate_domain_error)?,
        finish_date: parse_date("finishDate", finish_date).map_err(translate_domain_error)?,
        race_types: parse_race_types(race_types)?,
    })
}

fn search_filter(query: &SearchQuery) -> SearchFilter {
    SearchFilter {
        grades: split_list(query.grade.as_deref()),
        locations: split_list(query.location.as_deref()),
        stages: split_list(query.stage.as_deref()),
    }
}

fn query_selection(query: &SearchQuery) -> Result<DateRangeSelection, ApiError> {
    parse_selection(
        &query.start_date,
        &query.finish_date,
        &split_list(query.race_type.as_deref()),
    )
}

/// Lists stored meetings.
///
/// # Errors
///
/// Returns an error if the query is invalid.
pub async fn fetch_places(
    usecase: &PlaceUseCase,
    query: &SearchQuery,
) -> Result<ListPlacesResponse, ApiError> {
    let selection: DateRangeSelection = query_selection(query)?;
    let places = usecase
        .fetch_place_entity_list(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
            &search_filter(query),
        )
        .await
        .map_err(translate_core_error)?;
    debug!(count = places.len(), "Listing places");
    Ok(ListPlacesResponse {
        places: places.iter().map(PlaceInfo::from).collect(),
    })
}

/// Refreshes stored meetings from the web sources.
///
/// # Errors
///
/// Returns an error if the request is invalid or storage cannot be written.
pub async fn update_places(
    usecase: &PlaceUseCase,
    request: &UpdateRequest,
) -> Result<RegisterResponse, ApiError> {
    let selection: DateRangeSelection = parse_selection(
        &request.start_date,
        &request.finish_date,
        &request.race_type_list,
    )?;
    usecase
        .update_place_entity_list(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
        )
        .await
        .map(RegisterResponse::from)
        .map_err(translate_core_error)
}

/// Lists stored races.
///
/// # Errors
///
/// Returns an error if the query is invalid.
pub async fn fetch_races(
    usecase: &RaceUseCase,
    query: &SearchQuery,
) -> Result<ListRacesResponse, ApiError> {
    let selection: DateRangeSelection = query_selection(query)?;
    let races = usecase
        .fetch_race_entity_list(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
            &search_filter(query),
        )
        .await
        .map_err(translate_core_error)?;
    debug!(count = races.len(), "Listing races");
    Ok(ListRacesResponse {
        races: races.iter().map(RaceInfo::from).collect(),
    })
}

/// Refreshes stored races from the web sources.
///
/// # Errors
///
/// Returns an error if the request is invalid or storage cannot be written.
pub async fn update_races(
    usecase: &RaceUseCase,
    request: &UpdateRequest,
) -> Result<RegisterResponse, ApiError> {
    let selection: DateRangeSelection = parse_selection(
        &request.start_date,
        &request.finish_date,
        &request.race_type_list,
    )?;
    usecase
        .update_race_entity_list(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
        )
        .await
        .map(RegisterResponse::from)
        .map_err(translate_core_error)
}

/// Lists calendar events.
///
/// # Errors
///
/// Returns an error if the query is invalid.
pub async fn fetch_calendar(
    usecase: &CalendarUseCase,
    query: &SearchQuery,
) -> Result<ListCalendarResponse, ApiError> {
    let selection: DateRangeSelection = query_selection(query)?;
    let events = usecase
        .fetch_calendar_data_list(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
        )
        .await
        .map_err(translate_core_error)?;
    Ok(ListCalendarResponse {
        events: events.iter().map(CalendarInfo::from).collect(),
    })
}

/// Synchronises the calendars with stored races.
///
/// # Errors
///
/// Returns an error if the request is invalid or a calendar write failed.
pub async fn update_calendar(
    usecase: &CalendarUseCase,
    request: &UpdateRequest,
) -> Result<MessageResponse, ApiError> {
    let selection: DateRangeSelection = parse_selection(
        &request.start_date,
        &request.finish_date,
        &request.race_type_list,
    )?;
    let display_filter: SearchFilter = SearchFilter {
        grades: request.grade_list.clone(),
        locations: request.location_list.clone(),
        stages: request.stage_list.clone(),
    };
    usecase
        .update_calendar_data(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
            &display_filter,
        )
        .await
        .map_err(translate_core_error)?;
    Ok(MessageResponse {
        message: String::from("Calendar updated"),
    })
}

/// Deletes untagged calendar events in range.
///
/// # Errors
///
/// Returns an error if the request is invalid or a delete failed.
pub async fn cleanse_calendar(
    usecase: &CalendarUseCase,
    request: &UpdateRequest,
) -> Result<MessageResponse, ApiError> {
    let selection: DateRangeSelection = parse_selection(
        &request.start_date,
        &request.finish_date,
        &request.race_type_list,
    )?;
    usecase
        .cleanse_calendar(
            selection.start_date,
            selection.finish_date,
            &selection.race_types,
        )
        .await
        .map_err(translate_core_error)?;
    Ok(MessageResponse {
        message: String::from("Calendar cleansed"),
    })
}
