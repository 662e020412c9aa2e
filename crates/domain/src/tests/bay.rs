// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BayId, ParsedBay, normalize_bay_id, parse_bay_id};

#[test]
fn test_normalize_collapses_separator_variants() {
    assert_eq!(normalize_bay_id("BAY_001"), "BAY-001");
    assert_eq!(normalize_bay_id("bay-001"), "BAY-001");
    assert_eq!(normalize_bay_id("BAY 001"), "BAY-001");
}

#[test]
fn test_normalize_trims_and_uppercases() {
    assert_eq!(normalize_bay_id(" Bay_001  "), "BAY-001");
}

#[test]
fn test_normalize_handles_en_and_em_dashes() {
    assert_eq!(normalize_bay_id("bay\u{2013}002"), "BAY-002");
    assert_eq!(normalize_bay_id("bay \u{2014} 003"), "BAY-003");
}

#[test]
fn test_normalize_collapses_mixed_runs_to_one_hyphen() {
    assert_eq!(normalize_bay_id("BAY--001__002"), "BAY-001-002");
    assert_eq!(normalize_bay_id("bay - _ 004"), "BAY-004");
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize_bay_id(""), "");
    assert_eq!(normalize_bay_id("   "), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples: [&str; 10] = [
        "BAY-001-002",
        " bay_001 ",
        "bay\u{2013}\u{2014}9",
        "_leading",
        "trailing_",
        "a  b\tc",
        "???",
        "",
        "--",
        "bay 001 - 002",
    ];

    for sample in samples {
        let once: String = normalize_bay_id(sample);
        let twice: String = normalize_bay_id(&once);
        assert_eq!(once, twice, "normalization not idempotent for {sample:?}");
    }
}

#[test]
fn test_parse_two_block_code_uses_last_three_digit_run() {
    let parsed: ParsedBay = parse_bay_id("BAY-001-002").unwrap();
    assert_eq!(parsed.raw, "BAY-001-002");
    assert_eq!(parsed.aisle, "001");
    assert_eq!(parsed.section.as_deref(), Some("002"));
    assert_eq!(parsed.number, "002");
    assert_eq!(parsed.base_number(), Some(2));
}

#[test]
fn test_parse_three_block_code() {
    let parsed: ParsedBay = parse_bay_id("BAY-001-001-003").unwrap();
    assert_eq!(parsed.aisle, "001");
    assert_eq!(parsed.section.as_deref(), Some("001"));
    assert_eq!(parsed.number, "003");
}

#[test]
fn test_parse_mixed_separators_and_lowercase_prefix() {
    let parsed: ParsedBay = parse_bay_id("bay_12 34-5678").unwrap();
    assert_eq!(parsed.aisle, "12");
    assert_eq!(parsed.section.as_deref(), Some("34"));
    assert_eq!(parsed.number, "5678");
}

#[test]
fn test_parse_without_prefix() {
    let parsed: ParsedBay = parse_bay_id("001-002-003").unwrap();
    assert_eq!(parsed.aisle, "001");
    assert_eq!(parsed.number, "003");
}

#[test]
fn test_parse_prefix_without_separator() {
    let parsed: ParsedBay = parse_bay_id("BAY001").unwrap();
    assert_eq!(parsed.aisle, "001");
    assert_eq!(parsed.section, None);
    assert_eq!(parsed.number, "001");
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let parsed: ParsedBay = parse_bay_id("   BAY-001-002\t").unwrap();
    assert_eq!(parsed.raw, "BAY-001-002");
}

#[test]
fn test_parse_short_blocks_leave_number_empty() {
    let parsed: ParsedBay = parse_bay_id("BAY-1-2").unwrap();
    assert_eq!(parsed.aisle, "1");
    assert_eq!(parsed.section.as_deref(), Some("2"));
    assert_eq!(parsed.number, "");
    assert_eq!(parsed.base_number(), None);
}

#[test]
fn test_parse_fallback_requires_word_boundary() {
    // "001" is followed by an underscore, which is a word character
    let parsed: ParsedBay = parse_bay_id("BAY-001_02").unwrap();
    assert_eq!(parsed.aisle, "001");
    assert_eq!(parsed.section.as_deref(), Some("02"));
    assert_eq!(parsed.number, "");
}

#[test]
fn test_parse_fallback_may_come_from_earlier_block() {
    let parsed: ParsedBay = parse_bay_id("BAY-001-02").unwrap();
    assert_eq!(parsed.number, "001");
}

#[test]
fn test_parse_rejects_empty_and_whitespace() {
    assert_eq!(parse_bay_id(""), None);
    assert_eq!(parse_bay_id("   "), None);
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_bay_id("???"), None);
    assert_eq!(parse_bay_id("BAY-"), None);
    assert_eq!(parse_bay_id("BAY-A1"), None);
    assert_eq!(parse_bay_id("SHELF-001"), None);
}

#[test]
fn test_parse_rejects_oversized_block() {
    assert_eq!(parse_bay_id("BAY-12345"), None);
    assert_eq!(parse_bay_id("BAY-001-00002"), None);
}

#[test]
fn test_parse_rejects_too_many_blocks() {
    assert_eq!(parse_bay_id("BAY-001-002-003-004"), None);
}

#[test]
fn test_parse_rejects_trailing_separator() {
    assert_eq!(parse_bay_id("BAY-001-"), None);
}

#[test]
fn test_bay_id_equality_uses_normalized_form() {
    let a: BayId = BayId::new("bay_001");
    let b: BayId = BayId::new("BAY-001");
    assert_eq!(a, b);
    assert_eq!(a.raw(), "bay_001");
    assert_eq!(a.normalized(), "BAY-001");
}

#[test]
fn test_bay_id_parse_delegates_to_parser() {
    let bay: BayId = BayId::new("BAY-004-010");
    let parsed: ParsedBay = bay.parse().unwrap();
    assert_eq!(parsed.number, "010");
    assert_eq!(parsed.base_number(), Some(10));
}
