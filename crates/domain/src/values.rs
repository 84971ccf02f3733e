// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Small validated scalar values shared by the data objects.

use crate::error::DomainError;
use crate::race_type::RaceType;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Storage format for date-times (Japan local wall-clock time).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pads a number with leading zeros to the given width.
#[must_use]
pub fn pad_digits(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

/// Formats a date-time in the storage format.
#[must_use]
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a date-time in the storage format.
///
/// `T`-separated ISO timestamps and RFC 3339 timestamps with an offset are
/// accepted as well; an offset is dropped after converting to its local time.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value matches none of the
/// accepted formats.
pub fn parse_date_time(field: &'static str, value: &str) -> Result<NaiveDateTime, DomainError> {
    let trimmed: &str = value.trim();
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.naive_local()))
        .map_err(|_| DomainError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is not a valid date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DomainError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Validates an update timestamp.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is not a parseable timestamp.
pub fn validate_update_date(value: &str) -> Result<NaiveDateTime, DomainError> {
    parse_date_time("updateDate", value)
}

/// Parses an unsigned integer field.
///
/// # Errors
///
/// Returns `DomainError::InvalidNumber` if the value is not a non-negative integer.
pub fn parse_number(field: &'static str, value: &str) -> Result<u32, DomainError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), DomainError> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(DomainError::OutOfRange {
        field,
        value: i64::from(value),
        min: i64::from(min),
        max: i64::from(max),
    })
}

/// A race name. Must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaceName(String);

impl RaceName {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidName(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// The race number within a meeting, 1 to 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RaceNumber(u8);

impl RaceNumber {
    pub const MAX: u8 = 12;

    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` unless `1 <= value <= 12`.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        check_range("raceNumber", value, 1, u32::from(Self::MAX))?;
        Ok(Self(u8::try_from(value).unwrap_or(Self::MAX)))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// A post/frame position. The upper bound depends on the race type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionNumber(u8);

impl PositionNumber {
    /// # Errors
    ///
    /// Returns `DomainError::UnexpectedField` for horse racing and
    /// `DomainError::OutOfRange` when the position exceeds the race type's
    /// frame count.
    pub fn new(race_type: RaceType, value: u32) -> Result<Self, DomainError> {
        let max: u8 = race_type
            .max_position_number()
            .ok_or(DomainError::UnexpectedField {
                race_type,
                field: "positionNumber",
            })?;
        check_range("positionNumber", value, 1, u32::from(max))?;
        Ok(Self(u8::try_from(value).unwrap_or(max)))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// A registered player number, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerNumber(u32);

impl PlayerNumber {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the value is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        check_range("playerNumber", value, 1, u32::MAX)?;
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Race distance in metres, greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance(u32);

impl Distance {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the distance is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        check_range("distance", value, 1, u32::MAX)?;
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Meeting sequence of the year (1 to 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldTimes(u8);

impl HeldTimes {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` unless `1 <= value <= 10`.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        check_range("heldTimes", value, 1, 10)?;
        Ok(Self(u8::try_from(value).unwrap_or(10)))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Day sequence within a meeting (1 to 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldDayTimes(u8);

impl HeldDayTimes {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` unless `1 <= value <= 12`.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        check_range("heldDayTimes", value, 1, 12)?;
        Ok(Self(u8::try_from(value).unwrap_or(12)))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Track surface of a horse race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    /// 芝
    Turf,
    /// ダート
    Dirt,
    /// 障害
    Jump,
}

impl SurfaceType {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSurfaceType` for anything but 芝, ダート or 障害.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        match value {
            "芝" => Ok(Self::Turf),
            "ダート" => Ok(Self::Dirt),
            "障害" => Ok(Self::Jump),
            _ => Err(DomainError::InvalidSurfaceType(value.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Turf => "芝",
            Self::Dirt => "ダート",
            Self::Jump => "障害",
        }
    }
}

impl std::fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
