// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
#![allow(clippy::missing_const_for_fn)]

mod calendar;
mod data;
mod entity;
mod error;
mod filter;
mod grade;
mod identifiers;
mod location;
mod race_type;
mod values;

#[cfg(test)]
mod tests;

pub use calendar::CalendarData;
pub use data::{
    ConditionData, HeldDayData, PlaceData, PlaceDataUpdate, RaceData, RaceDataUpdate,
    RacePlayerData,
};
pub use entity::{PlaceEntity, PlaceEntityUpdate, RaceEntity, RaceEntityUpdate};
pub use error::DomainError;
pub use filter::{SearchFilter, Searchable, filter_by_grade, filter_by_location, filter_by_stage};
pub use grade::{GradeTier, GradeType, RaceStage, grade_list, stage_list};
pub use identifiers::{IdComponents, PlaceId, PlayerId, RaceId};
pub use location::{RaceCourse, location_code};
pub use race_type::{RaceFamily, RaceType};
pub use values::{
    DATE_TIME_FORMAT, Distance, HeldDayTimes, HeldTimes, PlayerNumber, PositionNumber, RaceName,
    RaceNumber, SurfaceType, format_date_time, pad_digits, parse_date, parse_date_time,
    parse_number, validate_update_date,
};
