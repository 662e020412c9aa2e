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

mod bay;
mod duplicates;
mod error;
mod labels;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use bay::{BayId, ParsedBay, normalize_bay_id, parse_bay_id};
pub use duplicates::{
    AcrossGroupDuplicate, DuplicateReport, Occurrence, WithinGroupDuplicate, find_duplicate_bays,
    find_duplicate_bins,
};
pub use error::DomainError;
pub use labels::{LabelBase, derive_group_labels, derive_labels};
pub use types::{BayGroup, LabelRow};
pub use validation::{MAX_BINS_PER_SHELF, validate_group_config, validate_groups};
