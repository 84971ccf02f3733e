// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Services and usecases of the race schedule backend.
//!
//! Services fan one operation out across race types: reads run per race
//! type in a fixed order and degrade to partial results, writes run one
//! parallel partition per race type and aggregate into a
//! [`RegisterResult`]. Usecases sit on top, validating and normalising
//! date ranges and applying search filters.

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

mod calendar_service;
mod calendar_usecase;
mod date_range;
mod error;
mod place_service;
mod place_usecase;
mod race_service;
mod race_usecase;
mod register_result;
mod registry;

#[cfg(test)]
mod tests;

pub use calendar_service::CalendarService;
pub use calendar_usecase::CalendarUseCase;
pub use date_range::{
    first_day_of_month, last_day_of_month, normalize_to_months, validate_date_range,
};
pub use error::CoreError;
pub use place_service::PlaceService;
pub use place_usecase::PlaceUseCase;
pub use race_service::RaceService;
pub use race_usecase::RaceUseCase;
pub use register_result::RegisterResult;
pub use registry::{DataSource, RepositorySet};
