// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod place_usecase_tests;
mod register_result_tests;

use crate::{DataSource, RepositorySet};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use race_schedule_domain::{PlaceData, PlaceEntity, RaceData, RaceEntity, RacePlayerData, RaceType};
use race_schedule_persistence::{
    InMemoryStorageGateway, PersistenceError, PlaceRepository, RaceRepository, RegisterOutcome,
    SearchPlaceFilter, SearchRaceFilter, StoragePlaceRepository, StorageRaceRepository,
};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

pub fn create_test_update_date() -> NaiveDateTime {
    date_time(2024, 1, 1, 12, 0)
}

pub fn create_test_keirin_place(day: u32) -> PlaceEntity {
    let place_data: PlaceData = PlaceData::create(
        RaceType::Keirin,
        date_time(2024, 6, day, 0, 0),
        "立川",
        Some("GⅢ"),
    )
    .unwrap();
    PlaceEntity::create_without_id(place_data, None, create_test_update_date()).unwrap()
}

pub fn create_test_boatrace_place(day: u32) -> PlaceEntity {
    let place_data: PlaceData = PlaceData::create(
        RaceType::Boatrace,
        date_time(2024, 6, day, 0, 0),
        "住之江",
        Some("SG"),
    )
    .unwrap();
    PlaceEntity::create_without_id(place_data, None, create_test_update_date()).unwrap()
}

pub fn create_test_keirin_race(day: u32, number: u32, grade: &str) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Keirin,
        "立川記念",
        date_time(2024, 6, day, 15, 40),
        "立川",
        grade,
        number,
        Some("S級決勝"),
    )
    .unwrap();
    let players: Vec<RacePlayerData> = (1..=3)
        .map(|position| {
            RacePlayerData::create(RaceType::Keirin, position, 15_000 + position).unwrap()
        })
        .collect();
    RaceEntity::create_without_id(race_data, None, None, players, create_test_update_date())
        .unwrap()
}

pub fn create_test_boatrace_race(day: u32, number: u32) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Boatrace,
        "グランプリ",
        date_time(2024, 6, day, 16, 30),
        "住之江",
        "SG",
        number,
        Some("優勝戦"),
    )
    .unwrap();
    RaceEntity::create_without_id(race_data, None, None, Vec::new(), create_test_update_date())
        .unwrap()
}

/// Storage-backed repositories for every race type over one in-memory store.
pub fn create_test_storage() -> (Arc<InMemoryStorageGateway>, RepositorySet) {
    let gateway: Arc<InMemoryStorageGateway> = Arc::new(InMemoryStorageGateway::new());
    let place_repository: Arc<dyn PlaceRepository> =
        Arc::new(StoragePlaceRepository::new(gateway.clone()));
    let race_repository: Arc<dyn RaceRepository> =
        Arc::new(StorageRaceRepository::new(gateway.clone()));
    let repositories: RepositorySet =
        RepositorySet::new().with_storage_repositories(&place_repository, &race_repository);
    (gateway, repositories)
}

/// A web-source stand-in that records every filter it is asked for.
#[derive(Default)]
pub struct RecordingPlaceRepository {
    pub entities: Vec<PlaceEntity>,
    pub fail: bool,
    pub filters: Mutex<Vec<SearchPlaceFilter>>,
}

impl RecordingPlaceRepository {
    pub fn returning(entities: Vec<PlaceEntity>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PlaceRepository for RecordingPlaceRepository {
    async fn fetch_place_entity_list(
        &self,
        filter: &SearchPlaceFilter,
    ) -> Result<Vec<PlaceEntity>, PersistenceError> {
        self.filters.lock().await.push(filter.clone());
        if self.fail {
            return Err(PersistenceError::Unavailable(String::from("site is down")));
        }
        Ok(self
            .entities
            .iter()
            .filter(|entity| entity.race_type() == filter.race_type)
            .cloned()
            .collect())
    }

    async fn register_place_entity_list(
        &self,
        _race_type: RaceType,
        _entities: Vec<PlaceEntity>,
    ) -> Result<RegisterOutcome<PlaceEntity>, PersistenceError> {
        Err(PersistenceError::Unsupported(String::from("read-only source")))
    }
}

/// A web-source stand-in that records every filter it is asked for.
#[derive(Default)]
pub struct RecordingRaceRepository {
    pub entities: Vec<RaceEntity>,
    pub filters: Mutex<Vec<SearchRaceFilter>>,
}

impl RecordingRaceRepository {
    pub fn returning(entities: Vec<RaceEntity>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RaceRepository for RecordingRaceRepository {
    async fn fetch_race_entity_list(
        &self,
        filter: &SearchRaceFilter,
    ) -> Result<Vec<RaceEntity>, PersistenceError> {
        self.filters.lock().await.push(filter.clone());
        Ok(self
            .entities
            .iter()
            .filter(|entity| entity.race_type() == filter.race_type)
            .cloned()
            .collect())
    }

    async fn register_race_entity_list(
        &self,
        _race_type: RaceType,
        _entities: Vec<RaceEntity>,
    ) -> Result<RegisterOutcome<RaceEntity>, PersistenceError> {
        Err(PersistenceError::Unsupported(String::from("read-only source")))
    }
}

pub fn with_web_place(
    repositories: RepositorySet,
    race_type: RaceType,
    repository: &Arc<RecordingPlaceRepository>,
) -> RepositorySet {
    let repository: Arc<dyn PlaceRepository> = repository.clone();
    repositories.with_place_repository(race_type, DataSource::Web, repository)
}

pub fn with_web_race(
    repositories: RepositorySet,
    race_type: RaceType,
    repository: &Arc<RecordingRaceRepository>,
) -> RepositorySet {
    let repository: Arc<dyn RaceRepository> = repository.clone();
    repositories.with_race_repository(race_type, DataSource::Web, repository)
}
