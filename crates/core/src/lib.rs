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

mod error;
mod generate;
mod generation;
mod request;

#[cfg(test)]
mod tests;

use bin_labels_domain::{BayGroup, DuplicateReport, find_duplicate_bays};

// Re-export public types and functions
pub use error::CoreError;
pub use generate::generate;
pub use generation::{Generation, GroupSummary};
pub use request::{DuplicatePolicy, GenerationRequest};

/// Reports whether a set of groups may be generated under a policy.
///
/// This is a read-only check for callers that want to disable a generate
/// action up front. It does not validate shelf or bin configuration.
///
/// # Arguments
///
/// * `groups` - The groups to check
/// * `policy` - The duplicate policy that will be applied
///
/// # Returns
///
/// * `Ok(DuplicateReport)` with any duplicates that are merely warnings
/// * `Err(CoreError::DuplicatesBlocked)` if the policy forbids generation
///
/// # Errors
///
/// Returns an error if duplicates exist and the policy is `Block`.
pub fn check_duplicates(
    groups: &[BayGroup],
    policy: DuplicatePolicy,
) -> Result<DuplicateReport, CoreError> {
    let report: DuplicateReport = find_duplicate_bays(groups);
    if policy.blocks() && !report.is_empty() {
        return Err(CoreError::DuplicatesBlocked { report });
    }
    Ok(report)
}
