// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::race_type::RaceType;

/// Errors that can occur while validating domain values.
///
/// Every variant carries the offending value and the field it was supplied
/// for. Factories wrap these in [`DomainError::Construction`] to name the
/// object that could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The race type name is not one of the supported disciplines.
    InvalidRaceType(String),
    /// An identifier does not follow the `<tag><digits>` grammar.
    InvalidId {
        /// The identifier field (`raceId`, `placeId`, ...).
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// The grade is not in the race type's grade vocabulary.
    InvalidGrade {
        /// The race type the grade was validated against.
        race_type: RaceType,
        /// The rejected value.
        value: String,
    },
    /// The location is not a venue of the race type.
    InvalidLocation {
        /// The race type the location was validated against.
        race_type: RaceType,
        /// The rejected value.
        value: String,
    },
    /// The stage is not in the race type's stage vocabulary.
    InvalidStage {
        /// The race type the stage was validated against.
        race_type: RaceType,
        /// The rejected value.
        value: String,
    },
    /// A numeric field is outside its permitted range.
    OutOfRange {
        /// The numeric field.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// A numeric field could not be parsed.
    InvalidNumber {
        /// The numeric field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The race name is empty.
    InvalidName(String),
    /// The surface type is not turf, dirt or jump.
    InvalidSurfaceType(String),
    /// A date or timestamp could not be parsed.
    InvalidDate {
        /// The date field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The race type requires a field that was not supplied.
    MissingField {
        /// The race type.
        race_type: RaceType,
        /// The missing field.
        field: &'static str,
    },
    /// The race type does not allow a field that was supplied.
    UnexpectedField {
        /// The race type.
        race_type: RaceType,
        /// The field that must be absent.
        field: &'static str,
    },
    /// Two values that must share a race type do not.
    RaceTypeMismatch {
        /// The race type that was expected.
        expected: RaceType,
        /// The race type that was found.
        actual: RaceType,
    },
    /// The identifier does not embed the date, location and number of its data.
    IdMismatch {
        /// The identifier that was supplied.
        id: String,
        /// The identifier derived from the data.
        expected: String,
    },
    /// Two players share a position within one race.
    DuplicatePosition(u8),
    /// A factory failed; wraps the validation error that caused it.
    Construction {
        /// The object that could not be created.
        target: &'static str,
        /// The underlying validation error.
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// Wraps this error with the name of the object being created.
    #[must_use]
    pub fn context(self, target: &'static str) -> Self {
        Self::Construction {
            target,
            source: Box::new(self),
        }
    }

    /// Returns the innermost validation error, skipping construction wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Construction { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRaceType(value) => write!(f, "Invalid race type: '{value}'"),
            Self::InvalidId {
                field,
                value,
                reason,
            } => write!(f, "Invalid {field} '{value}': {reason}"),
            Self::InvalidGrade { race_type, value } => {
                write!(f, "Invalid grade '{value}' for race type {race_type}")
            }
            Self::InvalidLocation { race_type, value } => {
                write!(f, "Invalid location '{value}' for race type {race_type}")
            }
            Self::InvalidStage { race_type, value } => {
                write!(f, "Invalid stage '{value}' for race type {race_type}")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Invalid {field}: {value}. Must be between {min} and {max}"
            ),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid {field}: '{value}' is not a number")
            }
            Self::InvalidName(value) => write!(f, "Invalid race name: '{value}'"),
            Self::InvalidSurfaceType(value) => write!(f, "Invalid surface type: '{value}'"),
            Self::InvalidDate { field, value } => {
                write!(f, "Invalid {field}: '{value}' is not a valid date")
            }
            Self::MissingField { race_type, field } => {
                write!(f, "Race type {race_type} requires {field}")
            }
            Self::UnexpectedField { race_type, field } => {
                write!(f, "Race type {race_type} does not allow {field}")
            }
            Self::RaceTypeMismatch { expected, actual } => {
                write!(f, "Race type mismatch: expected {expected}, got {actual}")
            }
            Self::IdMismatch { id, expected } => {
                write!(
                    f,
                    "Id '{id}' does not match its data (expected '{expected}')"
                )
            }
            Self::DuplicatePosition(position) => {
                write!(f, "Position number {position} is assigned twice")
            }
            Self::Construction { target, source } => {
                write!(f, "Failed to create {target}: {source}")
            }
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
