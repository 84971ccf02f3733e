// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed repository registry.
//!
//! Repositories are registered per race type and per [`DataSource`]. The
//! server builds one registry at start-up and hands it to the services.

use race_schedule_domain::RaceType;
use race_schedule_persistence::{PlaceRepository, RaceRepository};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Where a service reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// The CSV object store.
    Storage,
    /// The external race-listing sites.
    Web,
}

impl DataSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Place and race repositories keyed by race type and source.
#[derive(Clone, Default)]
pub struct RepositorySet {
    place_repositories: HashMap<(RaceType, DataSource), Arc<dyn PlaceRepository>>,
    race_repositories: HashMap<(RaceType, DataSource), Arc<dyn RaceRepository>>,
}

impl RepositorySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one storage repository pair for every race type.
    #[must_use]
    pub fn with_storage_repositories(
        self,
        place_repository: &Arc<dyn PlaceRepository>,
        race_repository: &Arc<dyn RaceRepository>,
    ) -> Self {
        RaceType::ALL.iter().fold(self, |set, &race_type| {
            set.with_place_repository(race_type, DataSource::Storage, Arc::clone(place_repository))
                .with_race_repository(race_type, DataSource::Storage, Arc::clone(race_repository))
        })
    }

    #[must_use]
    pub fn with_place_repository(
        mut self,
        race_type: RaceType,
        source: DataSource,
        repository: Arc<dyn PlaceRepository>,
    ) -> Self {
        self.place_repositories
            .insert((race_type, source), repository);
        self
    }

    #[must_use]
    pub fn with_race_repository(
        mut self,
        race_type: RaceType,
        source: DataSource,
        repository: Arc<dyn RaceRepository>,
    ) -> Self {
        self.race_repositories
            .insert((race_type, source), repository);
        self
    }

    #[must_use]
    pub fn place_repository(
        &self,
        race_type: RaceType,
        source: DataSource,
    ) -> Option<Arc<dyn PlaceRepository>> {
        self.place_repositories.get(&(race_type, source)).cloned()
    }

    #[must_use]
    pub fn race_repository(
        &self,
        race_type: RaceType,
        source: DataSource,
    ) -> Option<Arc<dyn RaceRepository>> {
        self.race_repositories.get(&(race_type, source)).cloned()
    }
}

impl fmt::Debug for RepositorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut places: Vec<String> = self
            .place_repositories
            .keys()
            .map(|(race_type, source)| format!("{race_type}/{source}"))
            .collect();
        places.sort();
        let mut races: Vec<String> = self
            .race_repositories
            .keys()
            .map(|(race_type, source)| format!("{race_type}/{source}"))
            .collect();
        races.sort();
        f.debug_struct("RepositorySet")
            .field("place_repositories", &places)
            .field("race_repositories", &races)
            .finish()
    }
}

/// Splits a batch by race type, keeping each partition in input order.
pub(crate) fn partition_by_race_type<T>(
    entities: Vec<T>,
    race_type_of: impl Fn(&T) -> RaceType,
) -> Vec<(RaceType, Vec<T>)> {
    let mut partitions: Vec<(RaceType, Vec<T>)> = Vec::new();
    for entity in entities {
        let race_type: RaceType = race_type_of(&entity);
        match partitions.iter_mut().find(|(rt, _)| *rt == race_type) {
            Some((_, batch)) => batch.push(entity),
            None => partitions.push((race_type, vec![entity])),
        }
    }
    partitions
}

/// Keeps the race types of [`RaceType::ALL`] that were requested, in that order.
pub(crate) fn requested_race_types(race_types: &[RaceType]) -> impl Iterator<Item = RaceType> + '_ {
    RaceType::ALL
        .iter()
        .copied()
        .filter(move |race_type| race_types.contains(race_type))
}
