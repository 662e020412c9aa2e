// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyShelfList {
        group: String::from("G1"),
    };
    assert_eq!(format!("{err}"), "Group 'G1' has bays but no shelves");

    let err: DomainError = DomainError::BlankShelfLabel {
        group: String::from("G1"),
        index: 2,
    };
    assert_eq!(
        format!("{err}"),
        "Group 'G1' has a blank shelf label at position 2"
    );

    let err: DomainError = DomainError::MissingBinCount {
        group: String::from("G1"),
        shelf: String::from("S2"),
    };
    assert_eq!(format!("{err}"), "Shelf 'S2' in group 'G1' has no bin count");

    let err: DomainError = DomainError::InvalidBinCount {
        group: String::from("G1"),
        shelf: String::from("S1"),
        count: -3,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid bin count -3 for shelf 'S1' in group 'G1'. Must be greater than 0"
    );

    let err: DomainError = DomainError::BinCountTooLarge {
        group: String::from("G1"),
        shelf: String::from("S1"),
        count: 1000,
        max: 999,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid bin count 1000 for shelf 'S1' in group 'G1'. Must be at most 999"
    );
}
