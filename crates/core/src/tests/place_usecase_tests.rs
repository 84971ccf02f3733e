// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    RecordingPlaceRepository, create_test_boatrace_place, create_test_keirin_place,
    create_test_storage, date, with_web_place,
};
use crate::{CoreError, DataSource, PlaceService, PlaceUseCase, RegisterResult};
use race_schedule_domain::{PlaceEntity, RaceType, SearchFilter};
use std::sync::Arc;

#[tokio::test]
async fn test_update_queries_whole_months_and_stores_result() {
    let web = Arc::new(RecordingPlaceRepository::returning(vec![
        create_test_keirin_place(3),
    ]));
    let (_gateway, repositories) = create_test_storage();
    let repositories = with_web_place(repositories, RaceType::Keirin, &web);
    let usecase: PlaceUseCase = PlaceUseCase::new(PlaceService::new(repositories));

    let result: RegisterResult = usecase
        .update_place_entity_list(date(2024, 6, 15), date(2024, 6, 20), &[RaceType::Keirin])
        .await
        .unwrap();

    let filters = web.filters.lock().await;
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].start_date, date(2024, 6, 1));
    assert_eq!(filters[0].finish_date, date(2024, 6, 30));
    assert!(result.is_success());
    assert_eq!(result.success_data_count, 1);

    let stored: Vec<PlaceEntity> = usecase
        .fetch_place_entity_list(
            date(2024, 6, 1),
            date(2024, 6, 30),
            &[RaceType::Keirin],
            &SearchFilter::default(),
        )
        .await
        .unwrap();
    assert_eq!(stored, vec![create_test_keirin_place(3)]);
}

#[tokio::test]
async fn test_fetch_applies_location_filter() {
    let (_gateway, repositories) = create_test_storage();
    let service: PlaceService = PlaceService::new(repositories);
    service
        .register_place_entity_list(
            vec![create_test_keirin_place(8), create_test_boatrace_place(9)],
            DataSource::Storage,
        )
        .await
        .unwrap();
    let usecase: PlaceUseCase = PlaceUseCase::new(service);
    let filter: SearchFilter = SearchFilter {
        locations: vec![String::from("住之江")],
        ..SearchFilter::default()
    };

    let places: Vec<PlaceEntity> = usecase
        .fetch_place_entity_list(date(2024, 6, 1), date(2024, 6, 30), &RaceType::ALL, &filter)
        .await
        .unwrap();

    assert_eq!(places, vec![create_test_boatrace_place(9)]);
}

#[tokio::test]
async fn test_fetch_rejects_reversed_range() {
    let (_gateway, repositories) = create_test_storage();
    let usecase: PlaceUseCase = PlaceUseCase::new(PlaceService::new(repositories));

    let result = usecase
        .fetch_place_entity_list(
            date(2024, 6, 30),
            date(2024, 6, 1),
            &RaceType::ALL,
            &SearchFilter::default(),
        )
        .await;

    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[tokio::test]
async fn test_update_without_web_repository_reports_failure() {
    let (_gateway, repositories) = create_test_storage();
    let usecase: PlaceUseCase = PlaceUseCase::new(PlaceService::new(repositories));

    let result: RegisterResult = usecase
        .update_place_entity_list(date(2024, 6, 15), date(2024, 6, 20), &[RaceType::Keirin])
        .await
        .unwrap();

    assert_eq!(result.code, 500);
    assert_eq!(result.message, "No web place repository for KEIRIN");
    assert_eq!(result.success_data_count, 0);
    assert_eq!(result.failure_data_count, 0);
}

#[tokio::test]
async fn test_update_stores_available_race_types_when_one_is_missing() {
    let web = Arc::new(RecordingPlaceRepository::returning(vec![
        create_test_keirin_place(3),
    ]));
    let (_gateway, repositories) = create_test_storage();
    let repositories = with_web_place(repositories, RaceType::Keirin, &web);
    let usecase: PlaceUseCase = PlaceUseCase::new(PlaceService::new(repositories));

    let result: RegisterResult = usecase
        .update_place_entity_list(
            date(2024, 6, 15),
            date(2024, 6, 20),
            &[RaceType::Keirin, RaceType::Boatrace],
        )
        .await
        .unwrap();

    assert_eq!(result.code, 500);
    assert_eq!(
        result.message,
        "Data registered successfully, No web place repository for BOATRACE"
    );
    assert_eq!(result.success_data_count, 1);

    let stored: Vec<PlaceEntity> = usecase
        .fetch_place_entity_list(
            date(2024, 6, 1),
            date(2024, 6, 30),
            &[RaceType::Keirin],
            &SearchFilter::default(),
        )
        .await
        .unwrap();
    assert_eq!(stored, vec![create_test_keirin_place(3)]);
}
