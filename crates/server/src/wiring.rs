// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builds the dependency graph by hand at start-up.

use race_schedule::{
    CalendarService, CalendarUseCase, PlaceService, PlaceUseCase, RaceService, RaceUseCase,
    RepositorySet,
};
use race_schedule_calendar::{
    CalendarConfig, CalendarError, CalendarGateway, GatewayCalendarRepository,
    GoogleCalendarGateway, InMemoryCalendarGateway,
};
use race_schedule_domain::RaceType;
use race_schedule_persistence::{
    FileStorageGateway, InMemoryStorageGateway, PlaceRepository, RaceRepository, StorageGateway,
    StoragePlaceRepository, StorageRaceRepository,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub place_usecase: Arc<PlaceUseCase>,
    pub race_usecase: Arc<RaceUseCase>,
    pub calendar_usecase: Arc<CalendarUseCase>,
}

/// A directory-backed store, or an in-memory one if no directory is given.
pub fn storage_gateway(storage_dir: Option<&Path>) -> Arc<dyn StorageGateway> {
    match storage_dir {
        Some(dir) => {
            info!(path = %dir.display(), "Using file storage");
            Arc::new(FileStorageGateway::new(dir))
        }
        None => {
            info!("Using in-memory storage");
            Arc::new(InMemoryStorageGateway::new())
        }
    }
}

/// The Google calendar if a token is given, an in-memory calendar otherwise.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn calendar_gateway(
    access_token: Option<&str>,
) -> Result<Arc<dyn CalendarGateway>, CalendarError> {
    match access_token {
        Some(token) => {
            info!("Using Google Calendar");
            Ok(Arc::new(GoogleCalendarGateway::new(token)?))
        }
        None => {
            info!("Using in-memory calendar");
            Ok(Arc::new(InMemoryCalendarGateway::new()))
        }
    }
}

/// Maps the configured calendar ids onto race types, skipping blanks.
#[must_use]
pub fn calendar_config(calendar_ids: &[(RaceType, Option<String>)]) -> CalendarConfig {
    calendar_ids
        .iter()
        .filter_map(|(race_type, id)| {
            id.as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| (*race_type, id.to_string()))
        })
        .fold(CalendarConfig::new(), |config, (race_type, id)| {
            config.with_calendar(race_type, id)
        })
}

/// Wires storage repositories, services and usecases together.
///
/// One storage repository pair serves every race type. No web-source
/// repositories are registered.
pub fn build_app_state(
    storage: &Arc<dyn StorageGateway>,
    calendar: Arc<dyn CalendarGateway>,
    config: CalendarConfig,
) -> AppState {
    let place_repository: Arc<dyn PlaceRepository> =
        Arc::new(StoragePlaceRepository::new(Arc::clone(storage)));
    let race_repository: Arc<dyn RaceRepository> =
        Arc::new(StorageRaceRepository::new(Arc::clone(storage)));
    let repositories: RepositorySet =
        RepositorySet::new().with_storage_repositories(&place_repository, &race_repository);

    let place_service: PlaceService = PlaceService::new(repositories.clone());
    let race_service: RaceService = RaceService::new(repositories);
    let calendar_service: CalendarService =
        CalendarService::new(Arc::new(GatewayCalendarRepository::new(calendar, config)));

    AppState {
        place_usecase: Arc::new(PlaceUseCase::new(place_service.clone())),
        race_usecase: Arc::new(RaceUseCase::new(place_service, race_service.clone())),
        calendar_usecase: Arc::new(CalendarUseCase::new(calendar_service, race_service)),
    }
}
