// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A batch of bays sharing one shelf and bin configuration.
///
/// Bin counts are signed so that a negative count coming from user input
/// can be reported as a configuration error instead of being rejected at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayGroup {
    /// The group name shown in every derived row.
    pub name: String,
    /// Bay identifiers in input order.
    pub bays: Vec<String>,
    /// Shelf labels in configured order.
    pub shelves: Vec<String>,
    /// Number of bins on each shelf, keyed by shelf label.
    pub bins_per_shelf: BTreeMap<String, i64>,
}

impl BayGroup {
    /// Creates a new `BayGroup`.
    ///
    /// # Arguments
    ///
    /// * `name` - The group name
    /// * `bays` - Bay identifiers in input order
    /// * `shelves` - Shelf labels in configured order
    /// * `bins_per_shelf` - Bin count per shelf label
    #[must_use]
    pub const fn new(
        name: String,
        bays: Vec<String>,
        shelves: Vec<String>,
        bins_per_shelf: BTreeMap<String, i64>,
    ) -> Self {
        Self {
            name,
            bays,
            shelves,
            bins_per_shelf,
        }
    }

    /// Creates a `BayGroup` where every shelf holds the same number of bins.
    #[must_use]
    pub fn with_uniform_bins(
        name: String,
        bays: Vec<String>,
        shelves: Vec<String>,
        bins: i64,
    ) -> Self {
        let bins_per_shelf: BTreeMap<String, i64> =
            shelves.iter().map(|shelf| (shelf.clone(), bins)).collect();
        Self::new(name, bays, shelves, bins_per_shelf)
    }

    /// Returns the configured bin count for a shelf, if any.
    #[must_use]
    pub fn bins_for(&self, shelf: &str) -> Option<i64> {
        self.bins_per_shelf.get(shelf).copied()
    }

    /// Returns the number of rows a valid group derives.
    ///
    /// This is `bays x sum(bins)` over the configured shelves. Missing or
    /// non-positive counts contribute nothing, and the result saturates at
    /// `usize::MAX` for counts no valid group can hold.
    #[must_use]
    pub fn expected_row_count(&self) -> usize {
        let bins_per_bay: usize = self
            .shelves
            .iter()
            .filter_map(|shelf| self.bins_for(shelf))
            .filter_map(|count| usize::try_from(count).ok())
            .fold(0, usize::saturating_add);
        self.bays.len().saturating_mul(bins_per_bay)
    }
}

/// One derived bin label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRow {
    /// Zero-based index of the group in the generation input.
    pub group_index: usize,
    /// The group name.
    pub group_name: String,
    /// Zero-based index of the bay within its group.
    pub bay_index: usize,
    /// The bay identifier as entered.
    pub bay_input: String,
    /// The canonical bay identifier.
    pub normalized_bay: String,
    /// The shelf label.
    pub shelf: String,
    /// Zero-based bin position on the shelf.
    pub position_index: usize,
    /// The derived label.
    pub bin_label: String,
}
