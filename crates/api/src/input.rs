// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading group definitions.
//!
//! Two formats are accepted:
//!
//! - Text blocks: groups separated by blank lines, bay IDs separated by
//!   newlines and/or commas. Shelves and bin counts come from the caller
//!   and apply to every group.
//! - JSON: either `{"groups": [...]}` or a bare array of groups, each with
//!   its own shelves and bin counts.

use crate::error::{ApiError, ApiResult};
use bin_labels_domain::BayGroup;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// The format of a group definition source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Blank-line separated blocks of bay IDs.
    Text,
    /// Group objects in JSON.
    Json,
}

impl InputFormat {
    /// Picks a format from a file extension, defaulting to text.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Shelf and bin settings applied to every group of a text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Shelf labels in order.
    pub shelves: Vec<String>,
    /// Bins on every shelf.
    pub bins_per_shelf: i64,
}

/// Returns the name given to an unnamed group.
#[must_use]
pub fn default_group_name(group_index: usize) -> String {
    format!("Group {}", group_index + 1)
}

/// Splits a comma-separated shelf list, trimming entries and dropping
/// blanks.
#[must_use]
pub fn parse_shelf_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|shelf| !shelf.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits text into groups of bay IDs.
///
/// A line containing only whitespace ends the current group. Within a
/// group, IDs may be separated by newlines, commas, or both. Empty groups
/// are dropped.
#[must_use]
pub fn parse_group_blocks(raw: &str) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.extend(
            line.split(',')
                .map(str::trim)
                .filter(|bay| !bay.is_empty())
                .map(str::to_string),
        );
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Builds groups from text blocks with shared shelf settings.
///
/// Groups are named `Group 1`, `Group 2`, ... in block order.
#[must_use]
pub fn groups_from_text(raw: &str, options: &TextOptions) -> Vec<BayGroup> {
    let groups: Vec<BayGroup> = parse_group_blocks(raw)
        .into_iter()
        .enumerate()
        .map(|(index, bays)| {
            BayGroup::with_uniform_bins(
                default_group_name(index),
                bays,
                options.shelves.clone(),
                options.bins_per_shelf,
            )
        })
        .collect();
    debug!(groups = groups.len(), "Parsed text group blocks");
    groups
}

/// Bin counts as written in JSON: one count for all shelves, or one per
/// shelf.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BinsInput {
    Uniform(i64),
    PerShelf(BTreeMap<String, i64>),
}

/// One group as written in JSON.
#[derive(Debug, Deserialize)]
struct GroupInput {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bays: Vec<String>,
    #[serde(default)]
    shelves: Vec<String>,
    #[serde(default)]
    bins_per_shelf: Option<BinsInput>,
}

impl GroupInput {
    fn into_group(self, group_index: usize) -> BayGroup {
        let name: String = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_group_name(group_index));

        match self.bins_per_shelf {
            Some(BinsInput::Uniform(bins)) => {
                BayGroup::with_uniform_bins(name, self.bays, self.shelves, bins)
            }
            Some(BinsInput::PerShelf(bins_per_shelf)) => {
                BayGroup::new(name, self.bays, self.shelves, bins_per_shelf)
            }
            None => BayGroup::new(name, self.bays, self.shelves, BTreeMap::new()),
        }
    }
}

/// The top level of a JSON group file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GroupsFile {
    Wrapped { groups: Vec<GroupInput> },
    Bare(Vec<GroupInput>),
}

/// Parses groups from JSON.
///
/// # Errors
///
/// Returns an error if the content is not valid JSON or does not have the
/// shape of a group list.
pub fn groups_from_json(raw: &str) -> ApiResult<Vec<BayGroup>> {
    let file: GroupsFile = serde_json::from_str(raw)?;
    let inputs: Vec<GroupInput> = match file {
        GroupsFile::Wrapped { groups } | GroupsFile::Bare(groups) => groups,
    };

    let groups: Vec<BayGroup> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| input.into_group(index))
        .collect();
    debug!(groups = groups.len(), "Parsed JSON groups");
    Ok(groups)
}

/// Loads groups from content in the given format.
///
/// # Errors
///
/// Returns an error if:
/// - JSON content cannot be parsed
/// - Text content is given without shelf settings
pub fn load_groups(
    raw: &str,
    format: InputFormat,
    text_options: Option<&TextOptions>,
) -> ApiResult<Vec<BayGroup>> {
    match format {
        InputFormat::Json => groups_from_json(raw),
        InputFormat::Text => {
            let options: &TextOptions = text_options.ok_or_else(|| ApiError::InvalidInput {
                field: String::from("shelves"),
                message: String::from("text input requires a shelf list and bin count"),
            })?;
            Ok(groups_from_text(raw, options))
        }
    }
}
