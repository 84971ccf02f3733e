// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::register_result::RegisterResult;
use crate::registry::{DataSource, RepositorySet, partition_by_race_type, requested_race_types};
use chrono::NaiveDate;
use futures::future::join_all;
use race_schedule_domain::{PlaceEntity, RaceEntity, RaceType};
use race_schedule_persistence::{PersistenceError, RegisterOutcome, SearchRaceFilter};
use tracing::{debug, warn};

/// Fans race reads and writes out to the per-race-type repositories.
#[derive(Debug, Clone)]
pub struct RaceService {
    repositories: RepositorySet,
}

impl RaceService {
    #[must_use]
    pub const fn new(repositories: RepositorySet) -> Self {
        Self { repositories }
    }

    /// Fetches races for each requested race type, in race type order.
    ///
    /// Each race type's filter carries the meetings of that race type from
    /// `place_entity_list`; web sources use them to locate race listings.
    /// Best effort like [`crate::PlaceService::fetch_place_entity_list`].
    pub async fn fetch_race_entity_list(
        &self,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        race_types: &[RaceType],
        source: DataSource,
        place_entity_list: &[PlaceEntity],
    ) -> Vec<RaceEntity> {
        let mut race_entity_list: Vec<RaceEntity> = Vec::new();
        for race_type in requested_race_types(race_types) {
            let places: Vec<PlaceEntity> = place_entity_list
                .iter()
                .filter(|place| place.race_type() == race_type)
                .cloned()
                .collect();
            let filter = SearchRaceFilter::new(race_type, start_date, finish_date, places);
            match self.fetch_one(&filter, source).await {
                Ok(entities) => {
                    debug!(%race_type, %source, count = entities.len(), "Fetched races");
                    race_entity_list.extend(entities);
                }
                Err(err) => {
                    warn!(%race_type, %source, error = %err, "Failed to fetch races");
                    break;
                }
            }
        }
        race_entity_list
    }

    async fn fetch_one(
        &self,
        filter: &SearchRaceFilter,
        source: DataSource,
    ) -> Result<Vec<RaceEntity>, CoreError> {
        let repository = self
            .repositories
            .race_repository(filter.race_type, source)
            .ok_or_else(|| {
                PersistenceError::Unsupported(format!(
                    "no {source} race repository for {}",
                    filter.race_type
                ))
            })?;
        Ok(repository.fetch_race_entity_list(filter).await?)
    }

    /// Registers a batch, one parallel partition per race type.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails to read or write its store.
    pub async fn register_race_entity_list(
        &self,
        entities: Vec<RaceEntity>,
        source: DataSource,
    ) -> Result<RegisterResult, CoreError> {
        let outcomes: Vec<RegisterOutcome<RaceEntity>> =
            self.register_outcomes(entities, source).await?;
        Ok(RegisterResult::aggregate(&outcomes))
    }

    pub(crate) async fn register_outcomes(
        &self,
        entities: Vec<RaceEntity>,
        source: DataSource,
    ) -> Result<Vec<RegisterOutcome<RaceEntity>>, CoreError> {
        let partitions = partition_by_race_type(entities, RaceEntity::race_type);
        let outcomes: Vec<RegisterOutcome<RaceEntity>> = join_all(
            partitions
                .into_iter()
                .map(|(race_type, batch)| self.register_partition(race_type, batch, source)),
        )
        .await
        .into_iter()
        .collect::<Result<_, _>>()?;
        Ok(outcomes)
    }

    /// Requested race types with no race repository for `source`.
    #[must_use]
    pub fn unavailable_race_types(
        &self,
        race_types: &[RaceType],
        source: DataSource,
    ) -> Vec<RaceType> {
        requested_race_types(race_types)
            .filter(|&race_type| {
                self.repositories
                    .race_repository(race_type, source)
                    .is_none()
            })
            .collect()
    }

    async fn register_partition(
        &self,
        race_type: RaceType,
        batch: Vec<RaceEntity>,
        source: DataSource,
    ) -> Result<RegisterOutcome<RaceEntity>, PersistenceError> {
        match self.repositories.race_repository(race_type, source) {
            Some(repository) => repository.register_race_entity_list(race_type, batch).await,
            None => {
                warn!(%race_type, %source, "No race repository registered");
                Ok(RegisterOutcome::failure(
                    format!("No {source} race repository for {race_type}"),
                    Vec::new(),
                    batch,
                ))
            }
        }
    }
}
