// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat CSV row projections of the domain entities.
//!
//! A record is built right before serialization or right after parsing and
//! is discarded once converted. Parsing validates every field, so a record
//! that exists always converts back into an entity unless the combination
//! of fields is inconsistent.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use race_schedule_domain::{
    ConditionData, DomainError, HeldDayData, PlaceData, PlaceEntity, PlaceId, PlayerId,
    PositionNumber, RaceData, RaceEntity, RaceId, RacePlayerData, RaceType, format_date_time,
    parse_date_time, parse_number, validate_update_date,
};
use std::collections::HashMap;

/// One parsed CSV row, addressed by header name.
pub struct CsvRow<'a> {
    race_type: RaceType,
    header_map: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> CsvRow<'a> {
    #[must_use]
    pub const fn new(
        race_type: RaceType,
        header_map: &'a HashMap<String, usize>,
        record: &'a StringRecord,
    ) -> Self {
        Self {
            race_type,
            header_map,
            record,
        }
    }

    /// Returns the trimmed value of a column, or `None` if the column is
    /// absent or the cell is empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.header_map
            .get(name)
            .and_then(|&idx| self.record.get(idx))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Returns the value of a column that must be present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the column is absent or empty.
    pub fn required(&self, name: &'static str) -> Result<&'a str, DomainError> {
        self.get(name).ok_or(DomainError::MissingField {
            race_type: self.race_type,
            field: name,
        })
    }

    fn required_number(&self, name: &'static str) -> Result<u32, DomainError> {
        parse_number(name, self.required(name)?)
    }
}

/// A row type stored in a CSV object.
pub trait CsvRecord: Sized {
    /// Name used in log messages.
    const KIND: &'static str;

    /// Column names written for the race type, in output order.
    fn headers(race_type: RaceType) -> Vec<&'static str>;

    /// Parses and validates one row.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a required column is missing or a value
    /// fails validation.
    fn from_row(row: &CsvRow<'_>) -> Result<Self, DomainError>;

    /// Cell values matching [`CsvRecord::headers`].
    fn to_row(&self) -> Vec<String>;

    /// Primary key used by the upsert merge.
    fn id(&self) -> &str;

    /// Date used to keep stored rows newest first.
    fn sort_date(&self) -> NaiveDateTime;
}

fn held_day_from_row(
    race_type: RaceType,
    row: &CsvRow<'_>,
) -> Result<Option<(u32, u32)>, DomainError> {
    if !race_type.has_held_day() {
        return Ok(None);
    }
    Ok(Some((
        row.required_number("heldTimes")?,
        row.required_number("heldDayTimes")?,
    )))
}

fn held_day_to_data(held_day: Option<(u32, u32)>) -> Result<Option<HeldDayData>, DomainError> {
    held_day
        .map(|(times, day_times)| HeldDayData::create(times, day_times))
        .transpose()
}

fn held_day_from_data(held_day: Option<&HeldDayData>) -> Option<(u32, u32)> {
    held_day.map(|data| {
        let times: u32 = u32::from(data.held_times().value());
        let day_times: u32 = u32::from(data.held_day_times().value());
        (times, day_times)
    })
}

fn condition_cells(data: &ConditionData) -> (String, u32) {
    (
        data.surface_type().as_str().to_string(),
        data.distance().value(),
    )
}

fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// A meeting row of `<tag>/placeList.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    race_type: RaceType,
    id: PlaceId,
    date_time: NaiveDateTime,
    location: String,
    grade: Option<String>,
    held_day: Option<(u32, u32)>,
    update_date: NaiveDateTime,
}

impl PlaceRecord {
    #[must_use]
    pub fn from_entity(entity: &PlaceEntity) -> Self {
        let place_data: &PlaceData = entity.place_data();
        Self {
            race_type: entity.race_type(),
            id: entity.id().clone(),
            date_time: place_data.date_time(),
            location: place_data.location().name().to_string(),
            grade: place_data.grade().map(|g| g.value().to_string()),
            held_day: held_day_from_data(entity.held_day_data()),
            update_date: entity.update_date(),
        }
    }

    /// Rebuilds the meeting entity.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the fields do not form a valid entity.
    pub fn to_entity(&self) -> Result<PlaceEntity, DomainError> {
        let place_data: PlaceData = PlaceData::create(
            self.race_type,
            self.date_time,
            &self.location,
            self.grade.as_deref(),
        )?;
        PlaceEntity::create(
            self.id.as_str(),
            place_data,
            held_day_to_data(self.held_day)?,
            self.update_date,
        )
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_type
    }

    #[must_use]
    pub const fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    fn parse_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        let race_type: RaceType = row.race_type;
        Ok(Self {
            race_type,
            id: PlaceId::new(race_type, row.required("id")?)?,
            date_time: parse_date_time("dateTime", row.required("dateTime")?)?,
            location: row.required("location")?.to_string(),
            grade: row.get("grade").map(str::to_string),
            held_day: held_day_from_row(race_type, row)?,
            update_date: validate_update_date(row.required("updateDate")?)?,
        })
    }
}

impl CsvRecord for PlaceRecord {
    const KIND: &'static str = "PlaceRecord";

    fn headers(race_type: RaceType) -> Vec<&'static str> {
        let mut headers: Vec<&'static str> =
            vec!["id", "dateTime", "location", "grade", "updateDate"];
        if race_type.has_held_day() {
            headers.extend(["heldTimes", "heldDayTimes"]);
        }
        headers
    }

    fn from_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        Self::parse_row(row).map_err(|e| e.context(Self::KIND))
    }

    fn to_row(&self) -> Vec<String> {
        let mut row: Vec<String> = vec![
            self.id.as_str().to_string(),
            format_date_time(&self.date_time),
            self.location.clone(),
            self.grade.clone().unwrap_or_default(),
            format_date_time(&self.update_date),
        ];
        if self.race_type.has_held_day() {
            row.push(optional_cell(self.held_day.map(|(times, _)| times)));
            row.push(optional_cell(self.held_day.map(|(_, day_times)| day_times)));
        }
        row
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_date(&self) -> NaiveDateTime {
        self.date_time
    }
}

/// A race row of `<tag>/raceList.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRecord {
    race_type: RaceType,
    id: RaceId,
    name: String,
    stage: Option<String>,
    date_time: NaiveDateTime,
    location: String,
    grade: String,
    number: u32,
    condition: Option<(String, u32)>,
    held_day: Option<(u32, u32)>,
    update_date: NaiveDateTime,
}

impl RaceRecord {
    #[must_use]
    pub fn from_entity(entity: &RaceEntity) -> Self {
        let race_data: &RaceData = entity.race_data();
        Self {
            race_type: entity.race_type(),
            id: entity.id().clone(),
            name: race_data.name().to_string(),
            stage: race_data.stage().map(|s| s.value().to_string()),
            date_time: race_data.date_time(),
            location: race_data.location().name().to_string(),
            grade: race_data.grade().value().to_string(),
            number: u32::from(race_data.number().value()),
            condition: entity.condition_data().map(condition_cells),
            held_day: held_day_from_data(entity.held_day_data()),
            update_date: entity.update_date(),
        }
    }

    /// Rebuilds the race entity with the given player assignments.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the fields do not form a valid entity.
    pub fn to_entity(&self, players: Vec<RacePlayerData>) -> Result<RaceEntity, DomainError> {
        let race_data: RaceData = RaceData::create(
            self.race_type,
            &self.name,
            self.date_time,
            &self.location,
            &self.grade,
            self.number,
            self.stage.as_deref(),
        )?;
        let condition: Option<ConditionData> = self
            .condition
            .as_ref()
            .map(|(surface, distance)| ConditionData::create(surface, *distance))
            .transpose()?;
        RaceEntity::create(
            self.id.as_str(),
            race_data,
            held_day_to_data(self.held_day)?,
            condition,
            players,
            self.update_date,
        )
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_type
    }

    #[must_use]
    pub const fn race_id(&self) -> &RaceId {
        &self.id
    }

    #[must_use]
    pub const fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    fn parse_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        let race_type: RaceType = row.race_type;
        let condition: Option<(String, u32)> = if race_type.is_horse_racing() {
            Some((
                row.required("surfaceType")?.to_string(),
                row.required_number("distance")?,
            ))
        } else {
            None
        };
        Ok(Self {
            race_type,
            id: RaceId::new(race_type, row.required("id")?)?,
            name: row.required("name")?.to_string(),
            stage: row.get("stage").map(str::to_string),
            date_time: parse_date_time("dateTime", row.required("dateTime")?)?,
            location: row.required("location")?.to_string(),
            grade: row.required("grade")?.to_string(),
            number: row.required_number("number")?,
            condition,
            held_day: held_day_from_row(race_type, row)?,
            update_date: validate_update_date(row.required("updateDate")?)?,
        })
    }
}

impl CsvRecord for RaceRecord {
    const KIND: &'static str = "RaceRecord";

    fn headers(race_type: RaceType) -> Vec<&'static str> {
        let mut headers: Vec<&'static str> = vec![
            "id",
            "name",
            "stage",
            "dateTime",
            "location",
            "grade",
            "number",
            "updateDate",
        ];
        if race_type.is_horse_racing() {
            headers.extend(["surfaceType", "distance"]);
        }
        if race_type.has_held_day() {
            headers.extend(["heldTimes", "heldDayTimes"]);
        }
        headers
    }

    fn from_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        Self::parse_row(row).map_err(|e| e.context(Self::KIND))
    }

    fn to_row(&self) -> Vec<String> {
        let mut row: Vec<String> = vec![
            self.id.as_str().to_string(),
            self.name.clone(),
            self.stage.clone().unwrap_or_default(),
            format_date_time(&self.date_time),
            self.location.clone(),
            self.grade.clone(),
            self.number.to_string(),
            format_date_time(&self.update_date),
        ];
        if self.race_type.is_horse_racing() {
            row.push(optional_cell(self.condition.as_ref().map(|(s, _)| s)));
            row.push(optional_cell(self.condition.as_ref().map(|(_, d)| d)));
        }
        if self.race_type.has_held_day() {
            row.push(optional_cell(self.held_day.map(|(times, _)| times)));
            row.push(optional_cell(self.held_day.map(|(_, day_times)| day_times)));
        }
        row
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_date(&self) -> NaiveDateTime {
        self.date_time
    }
}

/// A player assignment row of `<tag>/racePlayerList.csv`, keyed by its own
/// id and referencing its race by `raceId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacePlayerRecord {
    race_type: RaceType,
    id: PlayerId,
    race_id: RaceId,
    race_date: NaiveDate,
    position_number: u32,
    player_number: u32,
    update_date: NaiveDateTime,
}

impl RacePlayerRecord {
    /// Flattens every player assignment of a race.
    #[must_use]
    pub fn from_entity(entity: &RaceEntity) -> Vec<Self> {
        entity
            .race_player_data_list()
            .iter()
            .map(|player| Self {
                race_type: entity.race_type(),
                id: PlayerId::derive(entity.id(), player.position_number()),
                race_id: entity.id().clone(),
                race_date: entity.race_data().date_time().date(),
                position_number: u32::from(player.position_number().value()),
                player_number: player.player_number().value(),
                update_date: entity.update_date(),
            })
            .collect()
    }

    /// Rebuilds the player assignment.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the position or player number is invalid.
    pub fn to_player_data(&self) -> Result<RacePlayerData, DomainError> {
        RacePlayerData::create(self.race_type, self.position_number, self.player_number)
    }

    #[must_use]
    pub const fn race_id(&self) -> &RaceId {
        &self.race_id
    }

    fn parse_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        let race_type: RaceType = row.race_type;
        let id: PlayerId = PlayerId::new(race_type, row.required("id")?)?;
        let race_id: RaceId = RaceId::new(race_type, row.required("raceId")?)?;
        let position_number: u32 = row.required_number("positionNumber")?;
        let expected: PlayerId =
            PlayerId::derive(&race_id, PositionNumber::new(race_type, position_number)?);
        if id != expected {
            return Err(DomainError::IdMismatch {
                id: id.as_str().to_string(),
                expected: expected.as_str().to_string(),
            });
        }
        let race_date: NaiveDate = race_id.components(race_type)?.date;
        Ok(Self {
            race_type,
            id,
            race_id,
            race_date,
            position_number,
            player_number: row.required_number("playerNumber")?,
            update_date: validate_update_date(row.required("updateDate")?)?,
        })
    }
}

impl CsvRecord for RacePlayerRecord {
    const KIND: &'static str = "RacePlayerRecord";

    fn headers(_race_type: RaceType) -> Vec<&'static str> {
        vec![
            "id",
            "raceId",
            "positionNumber",
            "playerNumber",
            "updateDate",
        ]
    }

    fn from_row(row: &CsvRow<'_>) -> Result<Self, DomainError> {
        Self::parse_row(row).map_err(|e| e.context(Self::KIND))
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.as_str().to_string(),
            self.race_id.as_str().to_string(),
            self.position_number.to_string(),
            self.player_number.to_string(),
            format_date_time(&self.update_date),
        ]
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_date(&self) -> NaiveDateTime {
        NaiveDateTime::from(self.race_date)
    }
}
