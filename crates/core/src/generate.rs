// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::generation::{Generation, GroupSummary};
use crate::request::GenerationRequest;
use bin_labels_domain::{
    DuplicateReport, LabelRow, derive_group_labels, find_duplicate_bays, find_duplicate_bins,
    validate_groups,
};
use tracing::{debug, info, warn};

/// Logs every entry of a duplicate report at warn level.
fn log_duplicates(kind: &str, report: &DuplicateReport) {
    for dup in &report.within_group {
        warn!(
            kind,
            id = %dup.normalized,
            group = %dup.first.group_name,
            occurrences = dup.repeats.len() + 1,
            "Duplicate within group"
        );
    }
    for dup in &report.across_groups {
        warn!(
            kind,
            id = %dup.normalized,
            first_group = %dup.first.group_name,
            repeat_group = %dup.repeat.group_name,
            "Duplicate across groups"
        );
    }
}

/// Runs one label generation.
///
/// The run validates every group's configuration, scans bay identifiers
/// for duplicates, applies the request's duplicate policy, derives the
/// label rows, and finally scans the derived bin labels. Bin-label
/// duplicates are reported but never block.
///
/// # Arguments
///
/// * `request` - The groups and duplicate policy
///
/// # Returns
///
/// * `Ok(Generation)` with the rows and both duplicate reports
/// * `Err(CoreError)` if generation cannot proceed
///
/// # Errors
///
/// Returns an error if:
/// - A group's shelf or bin configuration is invalid
/// - Duplicate bay identifiers exist and the policy is `Block`
pub fn generate(request: &GenerationRequest) -> Result<Generation, CoreError> {
    info!(
        groups = request.groups.len(),
        policy = %request.policy,
        "Starting label generation"
    );

    validate_groups(&request.groups)?;

    let bay_duplicates: DuplicateReport = find_duplicate_bays(&request.groups);
    log_duplicates("bay", &bay_duplicates);

    if request.policy.blocks() && !bay_duplicates.is_empty() {
        warn!(
            duplicates = bay_duplicates.duplicate_ids().len(),
            "Duplicate bay IDs block generation"
        );
        return Err(CoreError::DuplicatesBlocked {
            report: bay_duplicates,
        });
    }

    let mut rows: Vec<LabelRow> = Vec::new();
    let mut groups: Vec<GroupSummary> = Vec::with_capacity(request.groups.len());

    for (group_index, group) in request.groups.iter().enumerate() {
        let group_rows: Vec<LabelRow> = derive_group_labels(group, group_index)?;
        debug!(
            group = %group.name,
            bays = group.bays.len(),
            rows = group_rows.len(),
            "Derived group labels"
        );
        groups.push(GroupSummary {
            group_name: group.name.clone(),
            bay_count: group.bays.len(),
            row_count: group_rows.len(),
        });
        rows.extend(group_rows);
    }

    let bin_duplicates: DuplicateReport = find_duplicate_bins(&rows);
    log_duplicates("bin", &bin_duplicates);

    info!(rows = rows.len(), "Label generation complete");

    Ok(Generation {
        rows,
        bay_duplicates,
        bin_duplicates,
        groups,
    })
}
