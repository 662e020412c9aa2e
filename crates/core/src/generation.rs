// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bin_labels_domain::{DuplicateReport, LabelRow};
use serde::{Deserialize, Serialize};

/// Row totals for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// The group name.
    pub group_name: String,
    /// Number of bays in the group.
    pub bay_count: usize,
    /// Number of rows derived for the group.
    pub row_count: usize,
}

/// The outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// Every derived row, in group, bay, shelf, position order.
    pub rows: Vec<LabelRow>,
    /// Duplicate bay identifiers found before derivation.
    pub bay_duplicates: DuplicateReport,
    /// Duplicate bin labels found in the derived rows.
    pub bin_duplicates: DuplicateReport,
    /// Per-group totals in group order.
    pub groups: Vec<GroupSummary>,
}

impl Generation {
    /// Returns the total number of rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether either scan reported a duplicate.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.bay_duplicates.is_empty() || !self.bin_duplicates.is_empty()
    }
}
