// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Source-agnostic repository interfaces.
//!
//! Storage-backed and web-backed repositories implement the same traits so
//! the service layer can dispatch to either.

use crate::error::PersistenceError;
use async_trait::async_trait;
use chrono::NaiveDate;
use race_schedule_domain::{PlaceEntity, RaceEntity, RaceType};

/// Status code of a fully successful registration.
pub const STATUS_OK: u16 = 200;
/// Status code of a registration with at least one failure.
pub const STATUS_ERROR: u16 = 500;

/// Selects meetings of one race type within an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlaceFilter {
    pub race_type: RaceType,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
}

impl SearchPlaceFilter {
    #[must_use]
    pub const fn new(race_type: RaceType, start_date: NaiveDate, finish_date: NaiveDate) -> Self {
        Self {
            race_type,
            start_date,
            finish_date,
        }
    }

    /// Returns whether `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.finish_date
    }
}

/// Selects races of one race type within an inclusive date range.
///
/// Web sources scrape race lists per meeting, so the filter also carries the
/// meetings already known for the range. Storage ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRaceFilter {
    pub race_type: RaceType,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
    pub place_entity_list: Vec<PlaceEntity>,
}

impl SearchRaceFilter {
    #[must_use]
    pub const fn new(
        race_type: RaceType,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        place_entity_list: Vec<PlaceEntity>,
    ) -> Self {
        Self {
            race_type,
            start_date,
            finish_date,
            place_entity_list,
        }
    }

    /// Returns whether `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.finish_date
    }
}

/// Result of registering one race type's batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome<T> {
    /// `200` when every entity was stored, `500` otherwise.
    pub code: u16,
    pub message: String,
    pub success_data: Vec<T>,
    pub failure_data: Vec<T>,
}

impl<T> RegisterOutcome<T> {
    /// All entities were stored.
    #[must_use]
    pub fn success(success_data: Vec<T>) -> Self {
        Self {
            code: STATUS_OK,
            message: String::from("Data registered successfully"),
            success_data,
            failure_data: Vec::new(),
        }
    }

    /// Some or all entities were not stored.
    #[must_use]
    pub fn failure(message: impl Into<String>, success_data: Vec<T>, failure_data: Vec<T>) -> Self {
        Self {
            code: STATUS_ERROR,
            message: message.into(),
            success_data,
            failure_data,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == STATUS_OK
    }
}

/// Fetches and stores meetings.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    async fn fetch_place_entity_list(
        &self,
        filter: &SearchPlaceFilter,
    ) -> Result<Vec<PlaceEntity>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the source cannot be written.
    async fn register_place_entity_list(
        &self,
        race_type: RaceType,
        entities: Vec<PlaceEntity>,
    ) -> Result<RegisterOutcome<PlaceEntity>, PersistenceError>;
}

/// Fetches and stores races.
#[async_trait]
pub trait RaceRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    async fn fetch_race_entity_list(
        &self,
        filter: &SearchRaceFilter,
    ) -> Result<Vec<RaceEntity>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the source cannot be written.
    async fn register_race_entity_list(
        &self,
        race_type: RaceType,
        entities: Vec<RaceEntity>,
    ) -> Result<RegisterOutcome<RaceEntity>, PersistenceError>;
}
