// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bin_labels_domain::{DomainError, DuplicateReport};

/// Errors that can occur during a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A group's configuration was rejected.
    DomainViolation(DomainError),
    /// Duplicate bay identifiers were found under the blocking policy.
    DuplicatesBlocked {
        /// The duplicates that stopped generation.
        report: DuplicateReport,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Configuration error: {err}"),
            Self::DuplicatesBlocked { report } => {
                write!(
                    f,
                    "Generation blocked by duplicate bay IDs: {}",
                    report.duplicate_ids().join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
