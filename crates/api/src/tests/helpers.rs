// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{NaiveDate, NaiveDateTime};
use race_schedule::{
    CalendarService, CalendarUseCase, DataSource, PlaceService, PlaceUseCase, RaceService,
    RaceUseCase, RepositorySet,
};
use race_schedule_calendar::{CalendarConfig, GatewayCalendarRepository, InMemoryCalendarGateway};
use race_schedule_domain::{PlaceData, PlaceEntity, RaceData, RaceEntity, RaceType};
use race_schedule_persistence::{
    InMemoryStorageGateway, PlaceRepository, RaceRepository, StoragePlaceRepository,
    StorageRaceRepository,
};
use std::sync::Arc;

use crate::{SearchQuery, UpdateRequest};

pub const BOATRACE_CALENDAR: &str = "boatrace@group.calendar.google.com";

pub struct TestUseCases {
    pub calendar_gateway: Arc<InMemoryCalendarGateway>,
    pub place_usecase: PlaceUseCase,
    pub race_usecase: RaceUseCase,
    pub calendar_usecase: CalendarUseCase,
}

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn create_test_boatrace_place(day: u32) -> PlaceEntity {
    let place_data: PlaceData = PlaceData::create(
        RaceType::Boatrace,
        date_time(2024, 6, day, 0, 0),
        "住之江",
        Some("SG"),
    )
    .unwrap();
    PlaceEntity::create_without_id(place_data, None, date_time(2024, 6, 1, 9, 0)).unwrap()
}

pub fn create_test_boatrace_race(day: u32, number: u32, grade: &str) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Boatrace,
        "グランプリ",
        date_time(2024, 6, day, 16, 30),
        "住之江",
        grade,
        number,
        Some("優勝戦"),
    )
    .unwrap();
    RaceEntity::create_without_id(
        race_data,
        None,
        None,
        Vec::new(),
        date_time(2024, 6, 1, 9, 0),
    )
    .unwrap()
}

/// Usecases over in-memory storage seeded with one meeting and two races.
pub async fn create_test_usecases() -> TestUseCases {
    let storage: Arc<InMemoryStorageGateway> = Arc::new(InMemoryStorageGateway::new());
    let place_repository: Arc<dyn PlaceRepository> =
        Arc::new(StoragePlaceRepository::new(storage.clone()));
    let race_repository: Arc<dyn RaceRepository> = Arc::new(StorageRaceRepository::new(storage));
    let repositories: RepositorySet =
        RepositorySet::new().with_storage_repositories(&place_repository, &race_repository);

    let place_service: PlaceService = PlaceService::new(repositories.clone());
    let race_service: RaceService = RaceService::new(repositories);
    place_service
        .register_place_entity_list(vec![create_test_boatrace_place(20)], DataSource::Storage)
        .await
        .unwrap();
    race_service
        .register_race_entity_list(
            vec![
                create_test_boatrace_race(20, 11, "GⅠ"),
                create_test_boatrace_race(20, 12, "SG"),
            ],
            DataSource::Storage,
        )
        .await
        .unwrap();

    let calendar_gateway: Arc<InMemoryCalendarGateway> = Arc::new(InMemoryCalendarGateway::new());
    let calendar_repository = GatewayCalendarRepository::new(
        calendar_gateway.clone(),
        CalendarConfig::new().with_calendar(RaceType::Boatrace, BOATRACE_CALENDAR),
    );

    TestUseCases {
        calendar_gateway,
        place_usecase: PlaceUseCase::new(place_service.clone()),
        race_usecase: RaceUseCase::new(place_service, race_service.clone()),
        calendar_usecase: CalendarUseCase::new(
            CalendarService::new(Arc::new(calendar_repository)),
            race_service,
        ),
    }
}

pub fn create_june_query(race_type: Option<&str>) -> SearchQuery {
    SearchQuery {
        start_date: String::from("2024-06-01"),
        finish_date: String::from("2024-06-30"),
        race_type: race_type.map(str::to_string),
        ..SearchQuery::default()
    }
}

pub fn create_june_request(race_types: &[&str]) -> UpdateRequest {
    UpdateRequest {
        start_date: String::from("2024-06-01"),
        finish_date: String::from("2024-06-30"),
        race_type_list: race_types.iter().map(|rt| (*rt).to_string()).collect(),
        ..UpdateRequest::default()
    }
}
