// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use race_schedule::CoreError;
use race_schedule_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// The field is taken from the innermost validation error; the message keeps
/// the full construction context.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: String = match err.root_cause() {
        DomainError::InvalidRaceType(_) | DomainError::RaceTypeMismatch { .. } => {
            String::from("raceType")
        }
        DomainError::InvalidId { field, .. }
        | DomainError::OutOfRange { field, .. }
        | DomainError::InvalidNumber { field, .. }
        | DomainError::InvalidDate { field, .. }
        | DomainError::MissingField { field, .. }
        | DomainError::UnexpectedField { field, .. } => (*field).to_string(),
        DomainError::InvalidGrade { .. } => String::from("grade"),
        DomainError::InvalidLocation { .. } => String::from("location"),
        DomainError::InvalidStage { .. } => String::from("stage"),
        DomainError::InvalidName(_) => String::from("name"),
        DomainError::InvalidSurfaceType(_) => String::from("surfaceType"),
        DomainError::IdMismatch { .. } => String::from("id"),
        DomainError::DuplicatePosition(_) => String::from("positionNumber"),
        DomainError::Construction { target, .. } => (*target).to_string(),
    };
    ApiError::InvalidInput {
        field,
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// Storage and calendar failures are reported as internal errors.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("finishDate"),
            message: err.to_string(),
        },
        CoreError::Persistence(_) | CoreError::Calendar(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
