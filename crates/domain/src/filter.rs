// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post-fetch search filtering by grade, location and stage.
//!
//! Each dimension is an independent intersection filter. An empty dimension
//! passes everything through; a non-empty one keeps only entities whose
//! field is in the set. Dimensions compose by logical AND, so the order in
//! which they are applied does not matter.

use crate::entity::{PlaceEntity, RaceEntity};
use crate::grade::{GradeType, RaceStage};

/// Fields an entity exposes to search filtering.
pub trait Searchable {
    fn grade(&self) -> Option<&str>;
    fn location(&self) -> &str;
    fn stage(&self) -> Option<&str>;
}

impl Searchable for PlaceEntity {
    fn grade(&self) -> Option<&str> {
        self.place_data().grade().map(GradeType::value)
    }

    fn location(&self) -> &str {
        self.place_data().location().name()
    }

    fn stage(&self) -> Option<&str> {
        None
    }
}

impl Searchable for RaceEntity {
    fn grade(&self) -> Option<&str> {
        Some(self.race_data().grade().value())
    }

    fn location(&self) -> &str {
        self.race_data().location().name()
    }

    fn stage(&self) -> Option<&str> {
        self.race_data().stage().map(RaceStage::value)
    }
}

fn keep(allowed: &[String], value: Option<&str>) -> bool {
    allowed.is_empty() || value.is_some_and(|v| allowed.iter().any(|a| a == v))
}

/// Keeps entities whose grade is in `grades`.
#[must_use]
pub fn filter_by_grade<T: Searchable>(entities: Vec<T>, grades: &[String]) -> Vec<T> {
    entities
        .into_iter()
        .filter(|entity| keep(grades, entity.grade()))
        .collect()
}

/// Keeps entities whose location is in `locations`.
#[must_use]
pub fn filter_by_location<T: Searchable>(entities: Vec<T>, locations: &[String]) -> Vec<T> {
    entities
        .into_iter()
        .filter(|entity| keep(locations, Some(entity.location())))
        .collect()
}

/// Keeps entities whose stage is in `stages`.
#[must_use]
pub fn filter_by_stage<T: Searchable>(entities: Vec<T>, stages: &[String]) -> Vec<T> {
    entities
        .into_iter()
        .filter(|entity| keep(stages, entity.stage()))
        .collect()
}

/// A combined search filter. Empty dimensions are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub grades: Vec<String>,
    pub locations: Vec<String>,
    pub stages: Vec<String>,
}

impl SearchFilter {
    /// Applies every dimension of the filter.
    #[must_use]
    pub fn apply<T: Searchable>(&self, entities: Vec<T>) -> Vec<T> {
        let entities: Vec<T> = filter_by_grade(entities, &self.grades);
        let entities: Vec<T> = filter_by_location(entities, &self.locations);
        filter_by_stage(entities, &self.stages)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty() && self.locations.is_empty() && self.stages.is_empty()
    }
}
