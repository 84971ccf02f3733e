// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Immutable domain data objects.
//!
//! Each object is built only through a validating `create` factory. `copy`
//! re-runs `create` with every field defaulted from `self` unless
//! overridden, so a copy fails exactly like `create` would.

use crate::error::DomainError;
use crate::grade::{GradeType, RaceStage};
use crate::location::RaceCourse;
use crate::race_type::RaceType;
use crate::values::{
    Distance, HeldDayTimes, HeldTimes, PlayerNumber, PositionNumber, RaceName, RaceNumber,
    SurfaceType,
};
use chrono::NaiveDateTime;

/// One day's meeting at one venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceData {
    race_type: RaceType,
    date_time: NaiveDateTime,
    location: RaceCourse,
    grade: Option<GradeType>,
}

/// Field overrides for [`PlaceData::copy`].
#[derive(Debug, Clone, Default)]
pub struct PlaceDataUpdate {
    pub race_type: Option<RaceType>,
    pub date_time: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub grade: Option<String>,
}

impl PlaceData {
    /// Creates a validated meeting.
    ///
    /// The grade must be present for mechanical racing and absent for horse
    /// racing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` wrapping the first failed field.
    pub fn create(
        race_type: RaceType,
        date_time: NaiveDateTime,
        location: &str,
        grade: Option<&str>,
    ) -> Result<Self, DomainError> {
        Self::validate(race_type, date_time, location, grade).map_err(|e| e.context("PlaceData"))
    }

    fn validate(
        race_type: RaceType,
        date_time: NaiveDateTime,
        location: &str,
        grade: Option<&str>,
    ) -> Result<Self, DomainError> {
        let location: RaceCourse = RaceCourse::new(race_type, location)?;
        let grade: Option<GradeType> = match (race_type.is_mechanical_racing(), grade) {
            (true, Some(value)) => Some(GradeType::new(race_type, value)?),
            (true, None) => {
                return Err(DomainError::MissingField {
                    race_type,
                    field: "grade",
                });
            }
            (false, Some(_)) => {
                return Err(DomainError::UnexpectedField {
                    race_type,
                    field: "grade",
                });
            }
            (false, None) => None,
        };
        Ok(Self {
            race_type,
            date_time,
            location,
            grade,
        })
    }

    /// Creates a copy with the given fields replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting meeting fails validation.
    pub fn copy(&self, update: PlaceDataUpdate) -> Result<Self, DomainError> {
        Self::create(
            update.race_type.unwrap_or(self.race_type),
            update.date_time.unwrap_or(self.date_time),
            update
                .location
                .as_deref()
                .unwrap_or_else(|| self.location.name()),
            update
                .grade
                .as_deref()
                .or_else(|| self.grade.as_ref().map(GradeType::value)),
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

    #[must_use]
    pub const fn location(&self) -> &RaceCourse {
        &self.location
    }

    #[must_use]
    pub const fn grade(&self) -> Option<&GradeType> {
        self.grade.as_ref()
    }
}

/// One race within a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceData {
    race_type: RaceType,
    name: RaceName,
    date_time: NaiveDateTime,
    location: RaceCourse,
    grade: GradeType,
    number: RaceNumber,
    stage: Option<RaceStage>,
}

/// Field overrides for [`RaceData::copy`].
#[derive(Debug, Clone, Default)]
pub struct RaceDataUpdate {
    pub race_type: Option<RaceType>,
    pub name: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub grade: Option<String>,
    pub number: Option<u32>,
    pub stage: Option<String>,
}

impl RaceData {
    /// Creates a validated race.
    ///
    /// The stage must be present for mechanical racing and absent for horse
    /// racing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` wrapping the first failed field.
    pub fn create(
        race_type: RaceType,
        name: &str,
        date_time: NaiveDateTime,
        location: &str,
        grade: &str,
        number: u32,
        stage: Option<&str>,
    ) -> Result<Self, DomainError> {
        Self::validate(race_type, name, date_time, location, grade, number, stage)
            .map_err(|e| e.context("RaceData"))
    }

    fn validate(
        race_type: RaceType,
        name: &str,
        date_time: NaiveDateTime,
        location: &str,
        grade: &str,
        number: u32,
        stage: Option<&str>,
    ) -> Result<Self, DomainError> {
        let stage: Option<RaceStage> = match (race_type.is_mechanical_racing(), stage) {
            (true, Some(value)) => Some(RaceStage::new(race_type, value)?),
            (true, None) => {
                return Err(DomainError::MissingField {
                    race_type,
                    field: "stage",
                });
            }
            (false, Some(_)) => {
                return Err(DomainError::UnexpectedField {
                    race_type,
                    field: "stage",
                });
            }
            (false, None) => None,
        };
        Ok(Self {
            race_type,
            name: RaceName::new(name)?,
            date_time,
            location: RaceCourse::new(race_type, location)?,
            grade: GradeType::new(race_type, grade)?,
            number: RaceNumber::new(number)?,
            stage,
        })
    }

    /// Creates a copy with the given fields replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting race fails validation.
    pub fn copy(&self, update: RaceDataUpdate) -> Result<Self, DomainError> {
        Self::create(
            update.race_type.unwrap_or(self.race_type),
            update.name.as_deref().unwrap_or_else(|| self.name.value()),
            update.date_time.unwrap_or(self.date_time),
            update
                .location
                .as_deref()
                .unwrap_or_else(|| self.location.name()),
            update
                .grade
                .as_deref()
                .unwrap_or_else(|| self.grade.value()),
            update
                .number
                .unwrap_or_else(|| u32::from(self.number.value())),
            update
                .stage
                .as_deref()
                .or_else(|| self.stage.as_ref().map(RaceStage::value)),
        )
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.value()
    }

    #[must_use]
    pub const fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    #[must_use]
    pub const fn location(&self) -> &RaceCourse {
        &self.location
    }

    #[must_use]
    pub const fn grade(&self) -> &GradeType {
        &self.grade
    }

    #[must_use]
    pub const fn number(&self) -> RaceNumber {
        self.number
    }

    #[must_use]
    pub const fn stage(&self) -> Option<&RaceStage> {
        self.stage.as_ref()
    }
}

/// One competitor's assignment within a mechanical race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RacePlayerData {
    race_type: RaceType,
    position_number: PositionNumber,
    player_number: PlayerNumber,
}

impl RacePlayerData {
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if the race type has no players,
    /// the position exceeds its frame count, or the player number is zero.
    pub fn create(
        race_type: RaceType,
        position_number: u32,
        player_number: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            race_type,
            position_number: PositionNumber::new(race_type, position_number)
                .map_err(|e| e.context("RacePlayerData"))?,
            player_number: PlayerNumber::new(player_number)
                .map_err(|e| e.context("RacePlayerData"))?,
        })
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_type
    }

    #[must_use]
    pub const fn position_number(&self) -> PositionNumber {
        self.position_number
    }

    #[must_use]
    pub const fn player_number(&self) -> PlayerNumber {
        self.player_number
    }
}

/// Course conditions of a horse race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionData {
    surface_type: SurfaceType,
    distance: Distance,
}

impl ConditionData {
    /// # Errors
    ///
    /// Returns `DomainError::Construction` for an unknown surface or a zero distance.
    pub fn create(surface_type: &str, distance: u32) -> Result<Self, DomainError> {
        Ok(Self {
            surface_type: SurfaceType::new(surface_type).map_err(|e| e.context("ConditionData"))?,
            distance: Distance::new(distance).map_err(|e| e.context("ConditionData"))?,
        })
    }

    #[must_use]
    pub const fn surface_type(&self) -> SurfaceType {
        self.surface_type
    }

    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }
}

/// JRA meeting counters: the nth meeting of the year and the nth day of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldDayData {
    held_times: HeldTimes,
    held_day_times: HeldDayTimes,
}

impl HeldDayData {
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if either counter is out of range.
    pub fn create(held_times: u32, held_day_times: u32) -> Result<Self, DomainError> {
        Ok(Self {
            held_times: HeldTimes::new(held_times).map_err(|e| e.context("HeldDayData"))?,
            held_day_times: HeldDayTimes::new(held_day_times)
                .map_err(|e| e.context("HeldDayData"))?,
        })
    }

    #[must_use]
    pub const fn held_times(&self) -> HeldTimes {
        self.held_times
    }

    #[must_use]
    pub const fn held_day_times(&self) -> HeldDayTimes {
        self.held_day_times
    }
}
