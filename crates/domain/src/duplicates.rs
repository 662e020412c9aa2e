// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duplicate identifier detection within and across groups.
//!
//! Comparison is always on the normalized form. The scan is a single pass
//! with a first-seen map, so it stays linear in the number of identifiers.
//! Nothing here decides whether duplicates are acceptable; callers apply
//! their own policy to the report.

use crate::bay::normalize_bay_id;
use crate::types::{BayGroup, LabelRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Where an identifier was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Zero-based group index.
    pub group_index: usize,
    /// The group name.
    pub group_name: String,
    /// The identifier as entered.
    pub raw: String,
}

/// A normalized identifier repeated inside one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithinGroupDuplicate {
    /// The normalized identifier.
    pub normalized: String,
    /// The first occurrence in the group.
    pub first: Occurrence,
    /// Raw forms of every later occurrence in the same group.
    pub repeats: Vec<String>,
}

/// A normalized identifier reused by a later group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcrossGroupDuplicate {
    /// The normalized identifier.
    pub normalized: String,
    /// The occurrence in the group that introduced the identifier.
    pub first: Occurrence,
    /// The first occurrence in the later group.
    pub repeat: Occurrence,
}

/// Every duplicate found by a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// Duplicates inside a single group, in group then first-seen order.
    pub within_group: Vec<WithinGroupDuplicate>,
    /// Duplicates spanning groups, in detection order.
    pub across_groups: Vec<AcrossGroupDuplicate>,
}

impl DuplicateReport {
    /// Returns whether the scan found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.within_group.is_empty() && self.across_groups.is_empty()
    }

    /// Returns the distinct normalized identifiers reported anywhere,
    /// sorted.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .within_group
            .iter()
            .map(|dup| dup.normalized.as_str())
            .chain(self.across_groups.iter().map(|dup| dup.normalized.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Lists identifiers present in more than one group together with the
    /// names of those groups, in the order the groups were scanned.
    #[must_use]
    pub fn groups_by_id(&self) -> Vec<(String, Vec<String>)> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<&str, Vec<String>> = HashMap::new();

        for dup in &self.across_groups {
            let names: &mut Vec<String> = match groups.entry(dup.normalized.as_str()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    order.push(dup.normalized.clone());
                    entry.insert(vec![dup.first.group_name.clone()])
                }
            };
            names.push(dup.repeat.group_name.clone());
        }

        order
            .into_iter()
            .map(|id| {
                let names: Vec<String> = groups.remove(id.as_str()).unwrap_or_default();
                (id, names)
            })
            .collect()
    }
}

/// Per-group bookkeeping for one normalized value.
struct GroupSighting {
    first_raw: String,
    repeats: Vec<String>,
}

/// Scans `(group_index, group_name, identifiers)` triples for duplicates.
fn scan<'a, G, I>(groups: G) -> DuplicateReport
where
    G: IntoIterator<Item = (usize, &'a str, I)>,
    I: IntoIterator<Item = &'a str>,
{
    let mut report: DuplicateReport = DuplicateReport::default();
    let mut first_seen: HashMap<String, Occurrence> = HashMap::new();

    for (group_index, group_name, identifiers) in groups {
        let mut order: Vec<String> = Vec::new();
        let mut sightings: HashMap<String, GroupSighting> = HashMap::new();

        for raw in identifiers {
            let normalized: String = normalize_bay_id(raw);

            if let Some(sighting) = sightings.get_mut(&normalized) {
                sighting.repeats.push(raw.to_string());
                continue;
            }

            let occurrence: Occurrence = Occurrence {
                group_index,
                group_name: group_name.to_string(),
                raw: raw.to_string(),
            };

            match first_seen.entry(normalized.clone()) {
                Entry::Occupied(entry) => {
                    report.across_groups.push(AcrossGroupDuplicate {
                        normalized: normalized.clone(),
                        first: entry.get().clone(),
                        repeat: occurrence,
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(occurrence);
                }
            }

            sightings.insert(
                normalized.clone(),
                GroupSighting {
                    first_raw: raw.to_string(),
                    repeats: Vec::new(),
                },
            );
            order.push(normalized);
        }

        for normalized in order {
            let Some(sighting) = sightings.remove(&normalized) else {
                continue;
            };
            if sighting.repeats.is_empty() {
                continue;
            }
            report.within_group.push(WithinGroupDuplicate {
                normalized,
                first: Occurrence {
                    group_index,
                    group_name: group_name.to_string(),
                    raw: sighting.first_raw,
                },
                repeats: sighting.repeats,
            });
        }
    }

    report
}

/// Finds bay identifiers repeated within a group or reused across groups.
///
/// A value repeated inside one group only is reported as a within-group
/// duplicate and never as an across-group duplicate. Each later group that
/// reuses a value is reported once, however often it repeats it.
#[must_use]
pub fn find_duplicate_bays(groups: &[BayGroup]) -> DuplicateReport {
    scan(groups.iter().enumerate().map(|(index, group)| {
        (
            index,
            group.name.as_str(),
            group.bays.iter().map(String::as_str),
        )
    }))
}

/// Finds derived bin labels repeated within a group or across groups.
///
/// Rows are expected in derivation order, so each group's rows are
/// contiguous.
#[must_use]
pub fn find_duplicate_bins(rows: &[LabelRow]) -> DuplicateReport {
    scan(
        rows.chunk_by(|a, b| a.group_index == b.group_index)
            .filter_map(|chunk| chunk.first().map(|first| (first, chunk)))
            .map(|(first, chunk)| {
                (
                    first.group_index,
                    first.group_name.as_str(),
                    chunk.iter().map(|row| row.bin_label.as_str()),
                )
            }),
    )
}
