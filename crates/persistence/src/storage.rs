// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repositories backed by CSV objects in a storage gateway.
//!
//! Every write rewrites the whole object: existing rows are read, merged
//! with the batch by id and written back newest first.

use crate::codec::{decode_records, encode_records, upsert_merge};
use crate::error::PersistenceError;
use crate::gateway::StorageGateway;
use crate::record::{CsvRecord, PlaceRecord, RacePlayerRecord, RaceRecord};
use crate::repository::{
    PlaceRepository, RaceRepository, RegisterOutcome, SearchPlaceFilter, SearchRaceFilter,
};
use async_trait::async_trait;
use race_schedule_domain::{PlaceEntity, RaceEntity, RacePlayerData, RaceType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const PLACE_LIST_FILE: &str = "placeList.csv";
pub const RACE_LIST_FILE: &str = "raceList.csv";
pub const RACE_PLAYER_LIST_FILE: &str = "racePlayerList.csv";

/// Returns the storage key of a race type's file.
#[must_use]
pub fn storage_key(race_type: RaceType, file_name: &str) -> String {
    format!("{}/{file_name}", race_type.tag())
}

async fn read_records<R: CsvRecord>(
    gateway: &dyn StorageGateway,
    race_type: RaceType,
    key: &str,
) -> Result<Vec<R>, PersistenceError> {
    match gateway.fetch(key).await? {
        Some(text) => decode_records(race_type, &text),
        None => {
            debug!(key, "No stored records");
            Ok(Vec::new())
        }
    }
}

async fn merge_and_write<R: CsvRecord>(
    gateway: &dyn StorageGateway,
    race_type: RaceType,
    key: &str,
    batch: Vec<R>,
) -> Result<(), PersistenceError> {
    let existing: Vec<R> = read_records(gateway, race_type, key).await?;
    let existing_count: usize = existing.len();
    let merged: Vec<R> = upsert_merge(existing, batch);
    debug!(
        key,
        existing = existing_count,
        merged = merged.len(),
        "Writing merged records"
    );
    gateway
        .write(key, &encode_records(race_type, &merged)?)
        .await
        .inspect_err(|e| error!(key, error = %e, "Failed to write merged records"))
}

/// Splits a batch into the entities of `race_type` and the rest.
fn partition_by_race_type<T>(
    race_type: RaceType,
    entities: Vec<T>,
    race_type_of: impl Fn(&T) -> RaceType,
) -> (Vec<T>, Vec<T>) {
    entities
        .into_iter()
        .partition(|entity| race_type_of(entity) == race_type)
}

/// Meetings stored in `<tag>/placeList.csv`.
#[derive(Clone)]
pub struct StoragePlaceRepository {
    gateway: Arc<dyn StorageGateway>,
}

impl StoragePlaceRepository {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PlaceRepository for StoragePlaceRepository {
    async fn fetch_place_entity_list(
        &self,
        filter: &SearchPlaceFilter,
    ) -> Result<Vec<PlaceEntity>, PersistenceError> {
        let key: String = storage_key(filter.race_type, PLACE_LIST_FILE);
        let records: Vec<PlaceRecord> =
            read_records(self.gateway.as_ref(), filter.race_type, &key).await?;

        let entities: Vec<PlaceEntity> = records
            .iter()
            .filter(|record| filter.contains(record.date_time().date()))
            .filter_map(|record| match record.to_entity() {
                Ok(entity) => Some(entity),
                Err(e) => {
                    warn!(key = %key, error = %e, "Skipping invalid place record");
                    None
                }
            })
            .collect();
        debug!(key = %key, count = entities.len(), "Fetched place entities");
        Ok(entities)
    }

    async fn register_place_entity_list(
        &self,
        race_type: RaceType,
        entities: Vec<PlaceEntity>,
    ) -> Result<RegisterOutcome<PlaceEntity>, PersistenceError> {
        let (matching, foreign) =
            partition_by_race_type(race_type, entities, PlaceEntity::race_type);
        if !matching.is_empty() {
            let key: String = storage_key(race_type, PLACE_LIST_FILE);
            let batch: Vec<PlaceRecord> = matching.iter().map(PlaceRecord::from_entity).collect();
            merge_and_write(self.gateway.as_ref(), race_type, &key, batch).await?;
        }
        if foreign.is_empty() {
            return Ok(RegisterOutcome::success(matching));
        }
        warn!(%race_type, count = foreign.len(), "Rejected place entities of another race type");
        Ok(RegisterOutcome::failure(
            format!("Place entities do not belong to {race_type}"),
            matching,
            foreign,
        ))
    }
}

/// Races stored in `<tag>/raceList.csv`, with player assignments of
/// mechanical racing in `<tag>/racePlayerList.csv`.
#[derive(Clone)]
pub struct StorageRaceRepository {
    gateway: Arc<dyn StorageGateway>,
}

impl StorageRaceRepository {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }

    async fn fetch_players(
        &self,
        race_type: RaceType,
    ) -> Result<HashMap<String, Vec<RacePlayerData>>, PersistenceError> {
        let key: String = storage_key(race_type, RACE_PLAYER_LIST_FILE);
        let records: Vec<RacePlayerRecord> =
            read_records(self.gateway.as_ref(), race_type, &key).await?;

        let mut players: HashMap<String, Vec<RacePlayerData>> = HashMap::new();
        for record in &records {
            match record.to_player_data() {
                Ok(player) => players
                    .entry(record.race_id().as_str().to_string())
                    .or_default()
                    .push(player),
                Err(e) => warn!(key = %key, error = %e, "Skipping invalid player record"),
            }
        }
        for list in players.values_mut() {
            list.sort_by_key(|player| player.position_number());
        }
        Ok(players)
    }
}

#[async_trait]
impl RaceRepository for StorageRaceRepository {
    async fn fetch_race_entity_list(
        &self,
        filter: &SearchRaceFilter,
    ) -> Result<Vec<RaceEntity>, PersistenceError> {
        let race_type: RaceType = filter.race_type;
        let key: String = storage_key(race_type, RACE_LIST_FILE);
        let records: Vec<RaceRecord> = read_records(self.gateway.as_ref(), race_type, &key).await?;
        let mut players: HashMap<String, Vec<RacePlayerData>> = HashMap::new();
        if race_type.is_mechanical_racing() {
            players = self.fetch_players(race_type).await?;
        }

        let entities: Vec<RaceEntity> = records
            .iter()
            .filter(|record| filter.contains(record.date_time().date()))
            .filter_map(|record| {
                let race_players: Vec<RacePlayerData> = players
                    .remove(record.race_id().as_str())
                    .unwrap_or_default();
                match record.to_entity(race_players) {
                    Ok(entity) => Some(entity),
                    Err(e) => {
                        warn!(key = %key, error = %e, "Skipping invalid race record");
                        None
                    }
                }
            })
            .collect();
        debug!(key = %key, count = entities.len(), "Fetched race entities");
        Ok(entities)
    }

    async fn register_race_entity_list(
        &self,
        race_type: RaceType,
        entities: Vec<RaceEntity>,
    ) -> Result<RegisterOutcome<RaceEntity>, PersistenceError> {
        let (matching, foreign) =
            partition_by_race_type(race_type, entities, RaceEntity::race_type);
        if !matching.is_empty() {
            let race_key: String = storage_key(race_type, RACE_LIST_FILE);
            let race_batch: Vec<RaceRecord> =
                matching.iter().map(RaceRecord::from_entity).collect();
            merge_and_write(self.gateway.as_ref(), race_type, &race_key, race_batch).await?;

            if race_type.is_mechanical_racing() {
                let player_key: String = storage_key(race_type, RACE_PLAYER_LIST_FILE);
                let player_batch: Vec<RacePlayerRecord> = matching
                    .iter()
                    .flat_map(RacePlayerRecord::from_entity)
                    .collect();
                merge_and_write(self.gateway.as_ref(), race_type, &player_key, player_batch).await?;
            }
        }
        if foreign.is_empty() {
            return Ok(RegisterOutcome::success(matching));
        }
        warn!(%race_type, count = foreign.len(), "Rejected race entities of another race type");
        Ok(RegisterOutcome::failure(
            format!("Race entities do not belong to {race_type}"),
            matching,
            foreign,
        ))
    }
}
