// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Date-time values use the storage
//! format `YYYY-MM-DD HH:MM:SS`; calendar instants are RFC 3339.

use race_schedule::RegisterResult;
use race_schedule_domain::{
    CalendarData, PlaceEntity, RaceEntity, RacePlayerData, RaceStage, format_date_time,
};
use serde::{Deserialize, Serialize};

/// Query of a fetch endpoint.
///
/// List parameters are comma-separated. An absent race type list means every
/// race type; an absent filter list does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub start_date: String,
    pub finish_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Body of an update or cleanse request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub start_date: String,
    pub finish_date: String,
    /// Race types to update; empty means every race type.
    #[serde(default)]
    pub race_type_list: Vec<String>,
    /// Only races of these grades are shown on the calendar.
    #[serde(default)]
    pub grade_list: Vec<String>,
    #[serde(default)]
    pub location_list: Vec<String>,
    #[serde(default)]
    pub stage_list: Vec<String>,
}

/// One meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInfo {
    pub id: String,
    pub race_type: String,
    pub date_time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_times: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_day_times: Option<u8>,
    pub update_date: String,
}

impl From<&PlaceEntity> for PlaceInfo {
    fn from(entity: &PlaceEntity) -> Self {
        let place_data = entity.place_data();
        Self {
            id: entity.id().as_str().to_string(),
            race_type: entity.race_type().as_str().to_string(),
            date_time: format_date_time(&place_data.date_time()),
            location: place_data.location().name().to_string(),
            grade: place_data.grade().map(|grade| grade.value().to_string()),
            held_times: entity.held_day_data().map(|held| held.held_times().value()),
            held_day_times: entity
                .held_day_data()
                .map(|held| held.held_day_times().value()),
            update_date: format_date_time(&entity.update_date()),
        }
    }
}

/// One competitor of a mechanical race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePlayerInfo {
    pub position_number: u8,
    pub player_number: u32,
}

impl From<&RacePlayerData> for RacePlayerInfo {
    fn from(player: &RacePlayerData) -> Self {
        Self {
            position_number: player.position_number().value(),
            player_number: player.player_number().value(),
        }
    }
}

/// One race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceInfo {
    pub id: String,
    pub race_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    pub date_time: String,
    pub location: String,
    pub grade: String,
    pub number: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_times: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_day_times: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub race_player_data_list: Vec<RacePlayerInfo>,
    pub update_date: String,
}

impl From<&RaceEntity> for RaceInfo {
    fn from(entity: &RaceEntity) -> Self {
        let race_data = entity.race_data();
        Self {
            id: entity.id().as_str().to_string(),
            race_type: entity.race_type().as_str().to_string(),
            name: race_data.name().to_string(),
            stage: race_data.stage().map(RaceStage::value).map(str::to_string),
            date_time: format_date_time(&race_data.date_time()),
            location: race_data.location().name().to_string(),
            grade: race_data.grade().value().to_string(),
            number: race_data.number().value(),
            surface_type: entity
                .condition_data()
                .map(|condition| condition.surface_type().as_str().to_string()),
            distance: entity
                .condition_data()
                .map(|condition| condition.distance().value()),
            held_times: entity.held_day_data().map(|held| held.held_times().value()),
            held_day_times: entity
                .held_day_data()
                .map(|held| held.held_day_times().value()),
            race_player_data_list: entity
                .race_player_data_list()
                .iter()
                .map(RacePlayerInfo::from)
                .collect(),
            update_date: format_date_time(&entity.update_date()),
        }
    }
}

/// One calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarInfo {
    pub id: String,
    pub race_type: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
}

impl From<&CalendarData> for CalendarInfo {
    fn from(data: &CalendarData) -> Self {
        Self {
            id: data.id.clone(),
            race_type: data.race_type.as_str().to_string(),
            title: data.title.clone(),
            start_time: data.start_time.to_rfc3339(),
            end_time: data.end_time.to_rfc3339(),
            location: data.location.clone(),
            description: data.description.clone(),
        }
    }
}

/// API response for listing meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlacesResponse {
    pub places: Vec<PlaceInfo>,
}

/// API response for listing races.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRacesResponse {
    pub races: Vec<RaceInfo>,
}

/// API response for listing calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCalendarResponse {
    pub events: Vec<CalendarInfo>,
}

/// API response for a register operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub code: u16,
    pub message: String,
    pub success_data_count: usize,
    pub failure_data_count: usize,
}

impl From<RegisterResult> for RegisterResponse {
    fn from(result: RegisterResult) -> Self {
        Self {
            code: result.code,
            message: result.message,
            success_data_count: result.success_data_count,
            failure_data_count: result.failure_data_count,
        }
    }
}

/// API response for an operation that only reports completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
