// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bin_labels_domain::BayGroup;

pub fn create_test_group(name: &str, bays: &[&str], bins: i64) -> BayGroup {
    BayGroup::with_uniform_bins(
        String::from(name),
        bays.iter().map(|bay| String::from(*bay)).collect(),
        vec![String::from("S1"), String::from("S2")],
        bins,
    )
}

pub fn create_duplicate_groups() -> Vec<BayGroup> {
    vec![
        create_test_group("Group 1", &["BAY-001-001", "BAY-001-002"], 2),
        create_test_group("Group 2", &["bay-001-002", "BAY-002-001"], 2),
    ]
}
