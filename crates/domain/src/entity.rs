// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier-bearing entities, the unit passed between service and
//! repository layers.
//!
//! One entity type serves every race type. Which optional parts an entity
//! carries is decided by its race type:
//!
//! | part              | JRA | NAR / OVERSEAS | KEIRIN / AUTORACE / BOATRACE |
//! |-------------------|-----|----------------|------------------------------|
//! | held-day counters | yes | no             | no                           |
//! | condition data    | yes | yes            | no                           |
//! | player list       | no  | no             | yes (may be empty)           |

use crate::data::{ConditionData, HeldDayData, PlaceData, RaceData, RacePlayerData};
use crate::error::DomainError;
use crate::identifiers::{PlaceId, RaceId};
use crate::race_type::RaceType;
use chrono::NaiveDateTime;
use std::collections::HashSet;

fn check_held_day(
    race_type: RaceType,
    held_day_data: Option<&HeldDayData>,
) -> Result<(), DomainError> {
    match (race_type.has_held_day(), held_day_data.is_some()) {
        (true, false) => Err(DomainError::MissingField {
            race_type,
            field: "heldDayData",
        }),
        (false, true) => Err(DomainError::UnexpectedField {
            race_type,
            field: "heldDayData",
        }),
        _ => Ok(()),
    }
}

/// One day's meeting at one venue, with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntity {
    id: PlaceId,
    place_data: PlaceData,
    held_day_data: Option<HeldDayData>,
    update_date: NaiveDateTime,
}

/// Field overrides for [`PlaceEntity::copy`].
#[derive(Debug, Clone, Default)]
pub struct PlaceEntityUpdate {
    pub id: Option<String>,
    pub place_data: Option<PlaceData>,
    pub held_day_data: Option<HeldDayData>,
    pub update_date: Option<NaiveDateTime>,
}

impl PlaceEntity {
    /// Creates a meeting entity with an explicit identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if the identifier is malformed or
    /// does not embed the meeting's date and venue, or if the held-day
    /// counters do not match the race type.
    pub fn create(
        id: &str,
        place_data: PlaceData,
        held_day_data: Option<HeldDayData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        Self::validate(id, place_data, held_day_data, update_date)
            .map_err(|e| e.context("PlaceEntity"))
    }

    fn validate(
        id: &str,
        place_data: PlaceData,
        held_day_data: Option<HeldDayData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let race_type: RaceType = place_data.race_type();
        let id: PlaceId = PlaceId::new(race_type, id)?;
        let expected: PlaceId = PlaceId::derive(
            race_type,
            place_data.date_time().date(),
            place_data.location(),
        );
        if id != expected {
            return Err(DomainError::IdMismatch {
                id: id.as_str().to_string(),
                expected: expected.as_str().to_string(),
            });
        }
        check_held_day(race_type, held_day_data.as_ref())?;
        Ok(Self {
            id,
            place_data,
            held_day_data,
            update_date,
        })
    }

    /// Creates a meeting entity whose identifier is derived from its data.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if the held-day counters do not
    /// match the race type.
    pub fn create_without_id(
        place_data: PlaceData,
        held_day_data: Option<HeldDayData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let id: PlaceId = PlaceId::derive(
            place_data.race_type(),
            place_data.date_time().date(),
            place_data.location(),
        );
        Self::create(id.as_str(), place_data, held_day_data, update_date)
    }

    /// Creates a copy with the given fields replaced, re-running validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting entity fails validation.
    pub fn copy(&self, update: PlaceEntityUpdate) -> Result<Self, DomainError> {
        Self::create(
            update.id.as_deref().unwrap_or_else(|| self.id.as_str()),
            update.place_data.unwrap_or_else(|| self.place_data.clone()),
            update.held_day_data.or(self.held_day_data),
            update.update_date.unwrap_or(self.update_date),
        )
    }

    #[must_use]
    pub const fn id(&self) -> &PlaceId {
        &self.id
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.place_data.race_type()
    }

    #[must_use]
    pub const fn place_data(&self) -> &PlaceData {
        &self.place_data
    }

    #[must_use]
    pub const fn held_day_data(&self) -> Option<&HeldDayData> {
        self.held_day_data.as_ref()
    }

    #[must_use]
    pub const fn update_date(&self) -> NaiveDateTime {
        self.update_date
    }
}

/// One race, with its identifier and race-type dependent parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceEntity {
    id: RaceId,
    race_data: RaceData,
    held_day_data: Option<HeldDayData>,
    condition_data: Option<ConditionData>,
    race_player_data_list: Vec<RacePlayerData>,
    update_date: NaiveDateTime,
}

/// Field overrides for [`RaceEntity::copy`].
#[derive(Debug, Clone, Default)]
pub struct RaceEntityUpdate {
    pub id: Option<String>,
    pub race_data: Option<RaceData>,
    pub held_day_data: Option<HeldDayData>,
    pub condition_data: Option<ConditionData>,
    pub race_player_data_list: Option<Vec<RacePlayerData>>,
    pub update_date: Option<NaiveDateTime>,
}

impl RaceEntity {
    /// Creates a race entity with an explicit identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if the identifier is malformed or
    /// does not embed the race's date, venue and number, or if the optional
    /// parts do not match the race type.
    pub fn create(
        id: &str,
        race_data: RaceData,
        held_day_data: Option<HeldDayData>,
        condition_data: Option<ConditionData>,
        race_player_data_list: Vec<RacePlayerData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        Self::validate(
            id,
            race_data,
            held_day_data,
            condition_data,
            race_player_data_list,
            update_date,
        )
        .map_err(|e| e.context("RaceEntity"))
    }

    fn validate(
        id: &str,
        race_data: RaceData,
        held_day_data: Option<HeldDayData>,
        condition_data: Option<ConditionData>,
        race_player_data_list: Vec<RacePlayerData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let race_type: RaceType = race_data.race_type();
        let id: RaceId = RaceId::new(race_type, id)?;
        let expected: RaceId = Self::derive_id(&race_data);
        if id != expected {
            return Err(DomainError::IdMismatch {
                id: id.as_str().to_string(),
                expected: expected.as_str().to_string(),
            });
        }
        check_held_day(race_type, held_day_data.as_ref())?;

        match (race_type.is_horse_racing(), condition_data.is_some()) {
            (true, false) => {
                return Err(DomainError::MissingField {
                    race_type,
                    field: "conditionData",
                });
            }
            (false, true) => {
                return Err(DomainError::UnexpectedField {
                    race_type,
                    field: "conditionData",
                });
            }
            _ => {}
        }

        if race_type.is_horse_racing() && !race_player_data_list.is_empty() {
            return Err(DomainError::UnexpectedField {
                race_type,
                field: "racePlayerDataList",
            });
        }
        let mut positions: HashSet<u8> = HashSet::new();
        for player in &race_player_data_list {
            if player.race_type() != race_type {
                return Err(DomainError::RaceTypeMismatch {
                    expected: race_type,
                    actual: player.race_type(),
                });
            }
            let position: u8 = player.position_number().value();
            if !positions.insert(position) {
                return Err(DomainError::DuplicatePosition(position));
            }
        }

        Ok(Self {
            id,
            race_data,
            held_day_data,
            condition_data,
            race_player_data_list,
            update_date,
        })
    }

    /// Derives the race identifier from race type, date, venue and number.
    #[must_use]
    pub fn derive_id(race_data: &RaceData) -> RaceId {
        RaceId::derive(
            race_data.race_type(),
            race_data.date_time().date(),
            race_data.location(),
            race_data.number(),
        )
    }

    /// Creates a race entity whose identifier is derived from its data.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Construction` if the optional parts do not match
    /// the race type.
    pub fn create_without_id(
        race_data: RaceData,
        held_day_data: Option<HeldDayData>,
        condition_data: Option<ConditionData>,
        race_player_data_list: Vec<RacePlayerData>,
        update_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let id: RaceId = Self::derive_id(&race_data);
        Self::create(
            id.as_str(),
            race_data,
            held_day_data,
            condition_data,
            race_player_data_list,
            update_date,
        )
    }

    /// Creates a copy with the given fields replaced, re-running validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting entity fails validation.
    pub fn copy(&self, update: RaceEntityUpdate) -> Result<Self, DomainError> {
        Self::create(
            update.id.as_deref().unwrap_or_else(|| self.id.as_str()),
            update.race_data.unwrap_or_else(|| self.race_data.clone()),
            update.held_day_data.or(self.held_day_data),
            update.condition_data.or(self.condition_data),
            update
                .race_player_data_list
                .unwrap_or_else(|| self.race_player_data_list.clone()),
            update.update_date.unwrap_or(self.update_date),
        )
    }

    #[must_use]
    pub const fn id(&self) -> &RaceId {
        &self.id
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_data.race_type()
    }

    #[must_use]
    pub const fn race_data(&self) -> &RaceData {
        &self.race_data
    }

    #[must_use]
    pub const fn held_day_data(&self) -> Option<&HeldDayData> {
        self.held_day_data.as_ref()
    }

    #[must_use]
    pub const fn condition_data(&self) -> Option<&ConditionData> {
        self.condition_data.as_ref()
    }

    #[must_use]
    pub fn race_player_data_list(&self) -> &[RacePlayerData] {
        &self.race_player_data_list
    }

    #[must_use]
    pub const fn update_date(&self) -> NaiveDateTime {
        self.update_date
    }
}
