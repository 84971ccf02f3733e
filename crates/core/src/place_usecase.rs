// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_range::{normalize_to_months, validate_date_range};
use crate::error::CoreError;
use crate::place_service::PlaceService;
use crate::register_result::RegisterResult;
use crate::registry::DataSource;
use chrono::NaiveDate;
use race_schedule_domain::{PlaceEntity, RaceType, SearchFilter};
use race_schedule_persistence::RegisterOutcome;
use tracing::{info, warn};

/// Meeting queries and the web-to-storage meeting refresh.
#[derive(Debug, Clone)]
pub struct PlaceUseCase {
    place_service: PlaceService,
}

impl PlaceUseCase {
    #[must_use]
    pub const fn new(place_service: PlaceService) -> Self {
        Self { place_service }
    }

    /// Reads stored meetings in range and applies the search filter.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateRange` if the range is reversed.
    pub async fn fetch_place_entity_list(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
        search_filter: &SearchFilter,
    ) -> Result<Vec<PlaceEntity>, CoreError> {
        validate_date_range(start_date, finish_date)?;
        info!(%start_date, %finish_date, ?race_types, "Fetching places");
        let place_entity_list: Vec<PlaceEntity> = self
            .place_service
            .fetch_place_entity_list(start_date, finish_date, race_types, DataSource::Storage)
            .await;
        Ok(search_filter.apply(place_entity_list))
    }

    /// Fetches meetings from the web over whole months and stores them.
    ///
    /// A requested race type without a web repository is reported as a
    /// failed partition.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is reversed or storage cannot be written.
    pub async fn update_place_entity_list(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
    ) -> Result<RegisterResult, CoreError> {
        validate_date_range(start_date, finish_date)?;
        let (start_date, finish_date) = normalize_to_months(start_date, finish_date);
        info!(%start_date, %finish_date, ?race_types, "Updating places");
        let unavailable: Vec<RaceType> = self
            .place_service
            .unavailable_race_types(race_types, DataSource::Web);
        let available: Vec<RaceType> = race_types
            .iter()
            .copied()
            .filter(|race_type| !unavailable.contains(race_type))
            .collect();
        let place_entity_list: Vec<PlaceEntity> = self
            .place_service
            .fetch_place_entity_list(start_date, finish_date, &available, DataSource::Web)
            .await;
        let mut outcomes: Vec<RegisterOutcome<PlaceEntity>> = self
            .place_service
            .register_outcomes(place_entity_list, DataSource::Storage)
            .await?;
        outcomes.extend(unavailable.into_iter().map(|race_type| {
            warn!(%race_type, "No web place repository registered");
            RegisterOutcome::failure(
                format!("No web place repository for {race_type}"),
                Vec::new(),
                Vec::new(),
            )
        }));
        Ok(RegisterResult::aggregate(&outcomes))
    }
}
