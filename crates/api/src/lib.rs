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

mod cache;
mod error;
mod export;
mod input;

#[cfg(test)]
mod tests;

pub use cache::{DEFAULT_CACHE_CAPACITY, GenerationCache, input_fingerprint};
pub use error::{ApiError, ApiResult};
pub use export::{
    ExportLayout, WideTable, wide_table, write_duplicates_csv, write_labels, write_long_csv,
    write_wide_csv,
};
pub use input::{
    InputFormat, TextOptions, default_group_name, groups_from_json, groups_from_text,
    load_groups, parse_group_blocks, parse_shelf_list,
};
