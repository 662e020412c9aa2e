// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating group configuration.
///
/// Malformed bay identifiers are never errors; they fall back to a less
/// specific labeling strategy. Only the shelf and bin configuration of a
/// group can make derivation fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The group has bays but no shelves to place bins on.
    EmptyShelfList {
        /// The group name.
        group: String,
    },
    /// A shelf label is empty or whitespace only.
    BlankShelfLabel {
        /// The group name.
        group: String,
        /// The zero-based position of the shelf in the shelf list.
        index: usize,
    },
    /// A configured shelf has no bin count.
    MissingBinCount {
        /// The group name.
        group: String,
        /// The shelf label.
        shelf: String,
    },
    /// A shelf's bin count is zero or negative.
    InvalidBinCount {
        /// The group name.
        group: String,
        /// The shelf label.
        shelf: String,
        /// The rejected count.
        count: i64,
    },
    /// A shelf's bin count exceeds the largest supported count.
    BinCountTooLarge {
        /// The group name.
        group: String,
        /// The shelf label.
        shelf: String,
        /// The rejected count.
        count: i64,
        /// The largest accepted count.
        max: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyShelfList { group } => {
                write!(f, "Group '{group}' has bays but no shelves")
            }
            Self::BlankShelfLabel { group, index } => {
                write!(f, "Group '{group}' has a blank shelf label at position {index}")
            }
            Self::MissingBinCount { group, shelf } => {
                write!(f, "Shelf '{shelf}' in group '{group}' has no bin count")
            }
            Self::InvalidBinCount {
                group,
                shelf,
                count,
            } => {
                write!(
                    f,
                    "Invalid bin count {count} for shelf '{shelf}' in group '{group}'. Must be greater than 0"
                )
            }
            Self::BinCountTooLarge {
                group,
                shelf,
                count,
                max,
            } => {
                write!(
                    f,
                    "Invalid bin count {count} for shelf '{shelf}' in group '{group}'. Must be at most {max}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
