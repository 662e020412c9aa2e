// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bin label derivation.
//!
//! Every bay contributes one row per (shelf, position), whether or not its
//! identifier parses. A parsed bay with a numeric suffix gets zero-padded
//! labels counting up from that suffix; anything else gets unpadded,
//! 1-based positions after its normalized identifier.

use crate::bay::{BayId, ParsedBay};
use crate::error::DomainError;
use crate::types::{BayGroup, LabelRow};
use crate::validation::validate_group_config;

/// Width of the zero-padded numeric part of a label.
const LABEL_NUMBER_WIDTH: usize = 3;

/// The prefix and starting number shared by every bin of one bay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBase {
    /// Text placed before the shelf label.
    pub prefix: String,
    /// The number the first bin on each shelf receives, when known.
    pub base_number: Option<u64>,
}

impl LabelBase {
    /// Determines the label base for a bay.
    ///
    /// With a numeric suffix, the suffix is stripped from the end of the
    /// normalized identifier to form the prefix. Without one, the whole
    /// normalized identifier becomes the prefix.
    #[must_use]
    pub fn for_bay(bay: &BayId) -> Self {
        let parsed: Option<ParsedBay> = bay.parse();
        let Some((parsed, base_number)) =
            parsed.and_then(|p| p.base_number().map(|base| (p, base)))
        else {
            return Self {
                prefix: with_trailing_hyphen(bay.normalized()),
                base_number: None,
            };
        };

        let prefix: String = bay.normalized().strip_suffix(parsed.number.as_str()).map_or_else(
            || with_trailing_hyphen(bay.normalized()),
            str::to_string,
        );

        Self {
            prefix,
            base_number: Some(base_number),
        }
    }

    /// Builds the label for the bin at `offset` on `shelf`.
    #[must_use]
    pub fn label(&self, shelf: &str, offset: u64) -> String {
        match self.base_number {
            Some(base) => format!(
                "{}{shelf}{:0width$}",
                self.prefix,
                base.saturating_add(offset),
                width = LABEL_NUMBER_WIDTH
            ),
            None => format!("{}{shelf}{}", self.prefix, offset.saturating_add(1)),
        }
    }
}

fn with_trailing_hyphen(value: &str) -> String {
    if value.ends_with('-') {
        value.to_string()
    } else {
        format!("{value}-")
    }
}

/// Derives the label rows for a single group.
///
/// Rows come out in bay input order, then shelf order, then ascending
/// position.
///
/// # Arguments
///
/// * `group` - The group to derive
/// * `group_index` - The group's zero-based position in the generation input
///
/// # Returns
///
/// * `Ok(Vec<LabelRow>)` with `bays x sum(bins)` rows
/// * `Err(DomainError)` if the group's configuration is invalid
///
/// # Errors
///
/// Returns an error if [`validate_group_config`] rejects the group.
pub fn derive_group_labels(
    group: &BayGroup,
    group_index: usize,
) -> Result<Vec<LabelRow>, DomainError> {
    validate_group_config(group)?;

    let shelf_bins: Vec<(&str, u64)> = group
        .shelves
        .iter()
        .map(|shelf| {
            let bins: u64 = group
                .bins_for(shelf)
                .and_then(|count| u64::try_from(count).ok())
                .unwrap_or_default();
            (shelf.as_str(), bins)
        })
        .collect();

    let mut rows: Vec<LabelRow> = Vec::with_capacity(group.expected_row_count());

    for (bay_index, raw) in group.bays.iter().enumerate() {
        let bay: BayId = BayId::new(raw);
        let base: LabelBase = LabelBase::for_bay(&bay);

        for &(shelf, bins) in &shelf_bins {
            for (position_index, offset) in (0..bins).enumerate() {
                rows.push(LabelRow {
                    group_index,
                    group_name: group.name.clone(),
                    bay_index,
                    bay_input: bay.raw().to_string(),
                    normalized_bay: bay.normalized().to_string(),
                    shelf: shelf.to_string(),
                    position_index,
                    bin_label: base.label(shelf, offset),
                });
            }
        }
    }

    Ok(rows)
}

/// Derives the label rows for every group, in group order.
///
/// # Errors
///
/// Returns the first configuration error encountered. No rows are
/// returned in that case.
pub fn derive_labels(groups: &[BayGroup]) -> Result<Vec<LabelRow>, DomainError> {
    let mut rows: Vec<LabelRow> = Vec::new();

    for (group_index, group) in groups.iter().enumerate() {
        rows.extend(derive_group_labels(group, group_index)?);
    }

    Ok(rows)
}
