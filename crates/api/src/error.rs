// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bin_labels::CoreError;
use bin_labels_domain::DomainError;

/// API-level errors.
///
/// These wrap generation failures together with the I/O and format errors
/// of reading group definitions and writing exports.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The input that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Group definitions could not be parsed or serialized as JSON.
    #[error("Invalid group JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A CSV export could not be written.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The generation run failed.
    #[error(transparent)]
    Generation(#[from] CoreError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Generation(CoreError::DomainViolation(err))
    }
}

impl ApiError {
    /// Returns whether the error came from duplicate blocking.
    #[must_use]
    pub const fn is_duplicate_block(&self) -> bool {
        matches!(
            self,
            Self::Generation(CoreError::DuplicatesBlocked { .. })
        )
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
