// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bin_labels_domain::BayGroup;
use serde::{Deserialize, Serialize};

/// What a generation run does when bay identifiers are duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DuplicatePolicy {
    /// Log the duplicates and derive labels anyway.
    #[default]
    Warn,
    /// Refuse to derive labels while duplicates exist.
    Block,
}

impl DuplicatePolicy {
    /// Builds the policy from a `block_on_duplicate` flag.
    #[must_use]
    pub const fn from_block_flag(block_on_duplicate: bool) -> Self {
        if block_on_duplicate {
            Self::Block
        } else {
            Self::Warn
        }
    }

    /// Returns whether duplicates stop generation.
    #[must_use]
    pub const fn blocks(&self) -> bool {
        matches!(self, Self::Block)
    }

    /// Returns the policy's name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Block => "block",
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The input of a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Groups in output order.
    pub groups: Vec<BayGroup>,
    /// How duplicate bay identifiers are handled.
    pub policy: DuplicatePolicy,
}

impl GenerationRequest {
    /// Creates a new `GenerationRequest`.
    #[must_use]
    pub const fn new(groups: Vec<BayGroup>, policy: DuplicatePolicy) -> Self {
        Self { groups, policy }
    }
}
