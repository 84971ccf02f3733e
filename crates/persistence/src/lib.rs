// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the race schedule backend.
//!
//! Meetings, races and player assignments are kept as CSV objects in a
//! key/value store, one set of files per race type:
//!
//! - `<tag>/placeList.csv`
//! - `<tag>/raceList.csv`
//! - `<tag>/racePlayerList.csv` (mechanical racing only)
//!
//! ## Read path
//!
//! An absent object reads as an empty list. Rows are matched to columns by
//! header name. A row that fails validation is logged and dropped, so one
//! bad row never hides the rest of the file.
//!
//! ## Write path
//!
//! Writes are upsert merges: the stored rows are read, rows sharing an id
//! with the batch are replaced, new ids are appended, and the whole file is
//! written back sorted newest first. Storage failures propagate to the
//! caller without retry.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod codec;
mod error;
mod gateway;
mod record;
mod repository;
mod storage;

#[cfg(test)]
mod tests;

pub use codec::{decode_records, encode_records, upsert_merge};
pub use error::PersistenceError;
pub use gateway::{FileStorageGateway, InMemoryStorageGateway, StorageGateway};
pub use record::{CsvRecord, CsvRow, PlaceRecord, RacePlayerRecord, RaceRecord};
pub use repository::{
    PlaceRepository, RaceRepository, RegisterOutcome, STATUS_ERROR, STATUS_OK, SearchPlaceFilter,
    SearchRaceFilter,
};
pub use storage::{
    PLACE_LIST_FILE, RACE_LIST_FILE, RACE_PLAYER_LIST_FILE, StoragePlaceRepository,
    StorageRaceRepository, storage_key,
};
