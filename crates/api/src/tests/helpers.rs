// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bin_labels_domain::BayGroup;
use std::collections::BTreeMap;

pub fn create_test_group(name: &str, bays: &[&str], bins: &[(&str, i64)]) -> BayGroup {
    let shelves: Vec<String> = bins.iter().map(|(shelf, _)| String::from(*shelf)).collect();
    let bins_per_shelf: BTreeMap<String, i64> = bins
        .iter()
        .map(|(shelf, count)| (String::from(*shelf), *count))
        .collect();
    BayGroup::new(
        String::from(name),
        bays.iter().map(|bay| String::from(*bay)).collect(),
        shelves,
        bins_per_shelf,
    )
}

pub fn csv_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}
