// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Place, race and player identifiers.
//!
//! All identifiers share one grammar:
//!
//! ```text
//! place:  <tag><YYYYMMDD><location code>
//! race:   <tag><YYYYMMDD><location code><race number>
//! player: <tag><YYYYMMDD><location code><race number><position number>
//! ```
//!
//! where `<tag>` is the lower-case race type and every numeric segment is
//! zero-padded to two digits. Identifiers are derived deterministically
//! from their data, so the same inputs always produce the same string.

use crate::error::DomainError;
use crate::location::RaceCourse;
use crate::race_type::RaceType;
use crate::values::{PositionNumber, RaceNumber, pad_digits};
use chrono::{Datelike, NaiveDate};

const PLACE_DIGITS: usize = 10;
const RACE_DIGITS: usize = 12;
const PLAYER_DIGITS: usize = 14;

/// The segments embedded in an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdComponents<'a> {
    pub race_type: RaceType,
    pub date: NaiveDate,
    pub location_code: &'a str,
    pub race_number: Option<u8>,
    pub position_number: Option<u8>,
}

fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidId {
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Checks `<tag><digits>` and returns the digit part.
fn split_digits<'a>(
    field: &'static str,
    race_type: RaceType,
    value: &'a str,
    digit_count: usize,
) -> Result<&'a str, DomainError> {
    let digits: &str = value.strip_prefix(race_type.tag()).ok_or_else(|| {
        invalid(
            field,
            value,
            format!("must start with '{}'", race_type.tag()),
        )
    })?;
    if digits.len() != digit_count || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            field,
            value,
            format!(
                "must be '{}' followed by {digit_count} digits",
                race_type.tag()
            ),
        ));
    }
    Ok(digits)
}

fn parse_components<'a>(
    field: &'static str,
    race_type: RaceType,
    value: &'a str,
    digit_count: usize,
) -> Result<IdComponents<'a>, DomainError> {
    let digits: &str = split_digits(field, race_type, value, digit_count)?;
    let date: NaiveDate = NaiveDate::parse_from_str(&digits[0..8], "%Y%m%d")
        .map_err(|_| invalid(field, value, "embedded date is not a calendar date"))?;
    let two_digits = |start: usize| -> Option<u8> {
        digits
            .get(start..start + 2)
            .and_then(|segment| segment.parse::<u8>().ok())
    };
    Ok(IdComponents {
        race_type,
        date,
        location_code: &digits[8..10],
        race_number: two_digits(10),
        position_number: two_digits(12),
    })
}

fn date_segment(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        pad_digits(u32::try_from(date.year()).unwrap_or_default(), 4),
        pad_digits(date.month(), 2),
        pad_digits(date.day(), 2)
    )
}

/// Identifier of one day's meeting at one venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(String);

impl PlaceId {
    /// Validates a place identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the value does not follow the
    /// place identifier grammar.
    pub fn new(race_type: RaceType, value: &str) -> Result<Self, DomainError> {
        parse_components("placeId", race_type, value, PLACE_DIGITS)?;
        Ok(Self(value.to_string()))
    }

    /// Derives the identifier from its meeting data.
    #[must_use]
    pub fn derive(race_type: RaceType, date: NaiveDate, location: &RaceCourse) -> Self {
        Self(format!(
            "{}{}{}",
            race_type.tag(),
            date_segment(date),
            location.code()
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of one race within a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RaceId(String);

impl RaceId {
    /// Validates a race identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the value does not follow the race
    /// identifier grammar, or if the trailing race number is outside 1 to 12.
    pub fn new(race_type: RaceType, value: &str) -> Result<Self, DomainError> {
        let components: IdComponents<'_> =
            parse_components("raceId", race_type, value, RACE_DIGITS)?;
        let number: u8 = components.race_number.unwrap_or_default();
        if !(1..=RaceNumber::MAX).contains(&number) {
            return Err(invalid("raceId", value, "race number must be 1 to 12"));
        }
        Ok(Self(value.to_string()))
    }

    /// Derives the identifier from race type, date, venue and race number.
    #[must_use]
    pub fn derive(
        race_type: RaceType,
        date: NaiveDate,
        location: &RaceCourse,
        number: RaceNumber,
    ) -> Self {
        Self(format!(
            "{}{}",
            PlaceId::derive(race_type, date, location).as_str(),
            pad_digits(u32::from(number.value()), 2)
        ))
    }

    /// Returns the embedded segments.
    ///
    /// # Errors
    ///
    /// Only fails if the identifier was built for a different race type.
    pub fn components(&self, race_type: RaceType) -> Result<IdComponents<'_>, DomainError> {
        parse_components("raceId", race_type, &self.0, RACE_DIGITS)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one competitor's assignment within a race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Validates a player identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the value does not follow the
    /// player identifier grammar or embeds an invalid race or position number.
    pub fn new(race_type: RaceType, value: &str) -> Result<Self, DomainError> {
        let components: IdComponents<'_> =
            parse_components("playerId", race_type, value, PLAYER_DIGITS)?;
        let number: u8 = components.race_number.unwrap_or_default();
        if !(1..=RaceNumber::MAX).contains(&number) {
            return Err(invalid("playerId", value, "race number must be 1 to 12"));
        }
        let max_position: u8 = race_type.max_position_number().ok_or_else(|| {
            invalid("playerId", value, "race type has no player assignments")
        })?;
        let position: u8 = components.position_number.unwrap_or_default();
        if !(1..=max_position).contains(&position) {
            return Err(invalid(
                "playerId",
                value,
                format!("position number must be 1 to {max_position}"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Derives the identifier from the race it belongs to and the position.
    #[must_use]
    pub fn derive(race_id: &RaceId, position_number: PositionNumber) -> Self {
        Self(format!(
            "{}{}",
            race_id.as_str(),
            pad_digits(u32::from(position_number.value()), 2)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
