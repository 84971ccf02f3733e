// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::register_result::RegisterResult;
use crate::registry::{DataSource, RepositorySet, partition_by_race_type, requested_race_types};
use chrono::NaiveDate;
use futures::future::join_all;
use race_schedule_domain::{PlaceEntity, RaceType};
use race_schedule_persistence::{PersistenceError, RegisterOutcome, SearchPlaceFilter};
use tracing::{debug, warn};

/// Fans meeting reads and writes out to the per-race-type repositories.
#[derive(Debug, Clone)]
pub struct PlaceService {
    repositories: RepositorySet,
}

impl PlaceService {
    #[must_use]
    pub const fn new(repositories: RepositorySet) -> Self {
        Self { repositories }
    }

    /// Fetches meetings for each requested race type, in race type order.
    ///
    /// Best effort: the first race type that cannot be read is logged and
    /// whatever was gathered before it is returned.
    pub async fn fetch_place_entity_list(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
        source: DataSource,
    ) -> Vec<PlaceEntity> {
        let mut place_entity_list: Vec<PlaceEntity> = Vec::new();
        for race_type in requested_race_types(race_types) {
            let filter = SearchPlaceFilter::new(race_type, start_date, finish_date);
            match self.fetch_one(&filter, source).await {
                Ok(entities) => {
                    debug!(%race_type, %source, count = entities.len(), "Fetched places");
                    place_entity_list.extend(entities);
                }
                Err(err) => {
                    warn!(%race_type, %source, error = %err, "Failed to fetch places");
                    break;
                }
            }
        }
        place_entity_list
    }

    async fn fetch_one(
        &self,
        filter: &SearchPlaceFilter,
        source: DataSource,
    ) -> Result<Vec<PlaceEntity>, CoreError> {
        let repository = self
            .repositories
            .place_repository(filter.race_type, source)
            .ok_or_else(|| {
                PersistenceError::Unsupported(format!(
                    "no {source} place repository for {}",
                    filter.race_type
                ))
            })?;
        Ok(repository.fetch_place_entity_list(filter).await?)
    }

    /// Registers a batch, one parallel partition per race type.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails to read or write its store.
    pub async fn register_place_entity_list(
        &self,
        entities: Vec<PlaceEntity>,
        source: DataSource,
    ) -> Result<RegisterResult, CoreError> {
        let outcomes: Vec<RegisterOutcome<PlaceEntity>> =
            self.register_outcomes(entities, source).await?;
        Ok(RegisterResult::aggregate(&outcomes))
    }

    pub(crate) async fn register_outcomes(
        &self,
        entities: Vec<PlaceEntity>,
        source: DataSource,
    ) -> Result<Vec<RegisterOutcome<PlaceEntity>>, CoreError> {
        let partitions = partition_by_race_type(entities, PlaceEntity::race_type);
        let outcomes: Vec<RegisterOutcome<PlaceEntity>> = join_all(
            partitions
                .into_iter()
                .map(|(race_type, batch)| self.register_partition(race_type, batch, source)),
        )
        .await
        .into_iter()
        .collect::<Result<_, _>>()?;
        Ok(outcomes)
    }

    /// Requested race types with no place repository for `source`.
    #[must_use]
    pub fn unavailable_race_types(
        &self,
        race_types: &[RaceType],
        source: DataSource,
    ) -> Vec<RaceType> {
        requested_race_types(race_types)
            .filter(|&race_type| {
                self.repositories
                    .place_repository(race_type, source)
                    .is_none()
            })
            .collect()
    }

    async fn register_partition(
        &self,
        race_type: RaceType,
        batch: Vec<PlaceEntity>,
        source: DataSource,
    ) -> Result<RegisterOutcome<PlaceEntity>, PersistenceError> {
        match self.repositories.place_repository(race_type, source) {
            Some(repository) => {
                repository
                    .register_place_entity_list(race_type, batch)
                    .await
            }
            None => {
                warn!(%race_type, %source, "No place repository registered");
                Ok(RegisterOutcome::failure(
                    format!("No {source} place repository for {race_type}"),
                    Vec::new(),
                    batch,
                ))
            }
        }
    }
}
