// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::BayGroup;

/// The largest number of bins a single shelf may hold.
pub const MAX_BINS_PER_SHELF: i64 = 999;

/// Validates a group's shelf and bin configuration.
///
/// Bay identifiers are not inspected here; unparseable bays are a data
/// condition handled by the deriver, not a configuration error.
///
/// # Arguments
///
/// * `group` - The group to validate
///
/// # Returns
///
/// * `Ok(())` if every configured shelf can be derived
/// * `Err(DomainError)` naming the first offending shelf
///
/// # Errors
///
/// Returns an error if:
/// - The group has bays but no shelves
/// - A shelf label is blank
/// - A shelf has no bin count
/// - A shelf's bin count is zero or negative
/// - A shelf's bin count exceeds [`MAX_BINS_PER_SHELF`]
pub fn validate_group_config(group: &BayGroup) -> Result<(), DomainError> {
    // Rule: bays need somewhere to put their bins
    if group.shelves.is_empty() && !group.bays.is_empty() {
        return Err(DomainError::EmptyShelfList {
            group: group.name.clone(),
        });
    }

    for (index, shelf) in group.shelves.iter().enumerate() {
        // Rule: shelf labels are part of every bin label and cannot be blank
        if shelf.trim().is_empty() {
            return Err(DomainError::BlankShelfLabel {
                group: group.name.clone(),
                index,
            });
        }

        // Rule: every shelf carries a positive bin count
        let Some(count) = group.bins_for(shelf) else {
            return Err(DomainError::MissingBinCount {
                group: group.name.clone(),
                shelf: shelf.clone(),
            });
        };
        if count <= 0 {
            return Err(DomainError::InvalidBinCount {
                group: group.name.clone(),
                shelf: shelf.clone(),
                count,
            });
        }
        if count > MAX_BINS_PER_SHELF {
            return Err(DomainError::BinCountTooLarge {
                group: group.name.clone(),
                shelf: shelf.clone(),
                count,
                max: MAX_BINS_PER_SHELF,
            });
        }
    }

    Ok(())
}

/// Validates the configuration of every group, stopping at the first error.
///
/// # Errors
///
/// Returns the first error reported by [`validate_group_config`].
pub fn validate_groups(groups: &[BayGroup]) -> Result<(), DomainError> {
    groups.iter().try_for_each(validate_group_config)
}
