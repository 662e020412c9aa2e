// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BayGroup;
use std::collections::BTreeMap;

pub fn create_test_group(name: &str, bays: &[&str], shelves: &[(&str, i64)]) -> BayGroup {
    let bins_per_shelf: BTreeMap<String, i64> = shelves
        .iter()
        .map(|(shelf, bins)| (String::from(*shelf), *bins))
        .collect();
    BayGroup::new(
        String::from(name),
        bays.iter().map(|bay| String::from(*bay)).collect(),
        shelves.iter().map(|(shelf, _)| String::from(*shelf)).collect(),
        bins_per_shelf,
    )
}

pub fn bay_only_group(name: &str, bays: &[&str]) -> BayGroup {
    create_test_group(name, bays, &[("S1", 1)])
}
