// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_group;
use crate::{ApiError, DEFAULT_CACHE_CAPACITY, GenerationCache, input_fingerprint};
use bin_labels::{DuplicatePolicy, Generation, GenerationRequest};
use bin_labels_domain::BayGroup;
use std::collections::BTreeMap;

fn sample_groups() -> Vec<BayGroup> {
    vec![create_test_group("G1", &["BAY-001-001"], &[("S1", 2), ("S2", 1)])]
}

#[test]
fn test_fingerprint_is_hex_sha256() {
    let fingerprint: String = input_fingerprint(&sample_groups(), DuplicatePolicy::Warn).unwrap();

    assert_eq!(fingerprint.len(), 64);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_fingerprint_is_stable_for_equal_inputs() {
    let first: String = input_fingerprint(&sample_groups(), DuplicatePolicy::Warn).unwrap();
    let second: String = input_fingerprint(&sample_groups(), DuplicatePolicy::Warn).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fingerprint_ignores_bin_map_insertion_order() {
    let mut forward: BTreeMap<String, i64> = BTreeMap::new();
    forward.insert(String::from("S1"), 2);
    forward.insert(String::from("S2"), 1);
    let mut backward: BTreeMap<String, i64> = BTreeMap::new();
    backward.insert(String::from("S2"), 1);
    backward.insert(String::from("S1"), 2);

    let shelves: Vec<String> = vec![String::from("S1"), String::from("S2")];
    let bays: Vec<String> = vec![String::from("BAY-001-001")];
    let a: BayGroup = BayGroup::new(String::from("G"), bays.clone(), shelves.clone(), forward);
    let b: BayGroup = BayGroup::new(String::from("G"), bays, shelves, backward);

    assert_eq!(
        input_fingerprint(&[a], DuplicatePolicy::Warn).unwrap(),
        input_fingerprint(&[b], DuplicatePolicy::Warn).unwrap()
    );
}

#[test]
fn test_fingerprint_changes_with_inputs() {
    let base: String = input_fingerprint(&sample_groups(), DuplicatePolicy::Warn).unwrap();
    let blocked: String = input_fingerprint(&sample_groups(), DuplicatePolicy::Block).unwrap();
    let more_bins: String = input_fingerprint(
        &[create_test_group("G1", &["BAY-001-001"], &[("S1", 3), ("S2", 1)])],
        DuplicatePolicy::Warn,
    )
    .unwrap();

    assert_ne!(base, blocked);
    assert_ne!(base, more_bins);
}

#[test]
fn test_cache_hits_on_repeat_request() {
    let mut cache: GenerationCache = GenerationCache::default();
    let request: GenerationRequest = GenerationRequest::new(sample_groups(), DuplicatePolicy::Warn);

    let first: Generation = cache.get_or_generate(&request).unwrap();
    let second: Generation = cache.get_or_generate(&request).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.row_count(), 3);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_evicts_oldest_entry() {
    let mut cache: GenerationCache = GenerationCache::new(1);
    let first: GenerationRequest = GenerationRequest::new(sample_groups(), DuplicatePolicy::Warn);
    let second: GenerationRequest =
        GenerationRequest::new(sample_groups(), DuplicatePolicy::Block);

    cache.get_or_generate(&first).unwrap();
    cache.get_or_generate(&second).unwrap();
    cache.get_or_generate(&first).unwrap();

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.misses(), 3);
    assert_eq!(cache.hits(), 0);
}

#[test]
fn test_cache_does_not_store_failures() {
    let mut cache: GenerationCache = GenerationCache::default();
    let request: GenerationRequest = GenerationRequest::new(
        vec![
            create_test_group("A", &["BAY-001-001"], &[("S1", 1)]),
            create_test_group("B", &["bay-001-001"], &[("S1", 1)]),
        ],
        DuplicatePolicy::Block,
    );

    let err: ApiError = cache.get_or_generate(&request).unwrap_err();

    assert!(err.is_duplicate_block());
    assert!(cache.is_empty());
    assert_eq!(cache.misses(), 1);
}

#[test]
fn test_cache_capacity_is_at_least_one() {
    assert_eq!(GenerationCache::new(0).capacity(), 1);
    assert_eq!(GenerationCache::default().capacity(), DEFAULT_CACHE_CAPACITY);
}

#[test]
fn test_clear_keeps_counters() {
    let mut cache: GenerationCache = GenerationCache::default();
    let request: GenerationRequest = GenerationRequest::new(sample_groups(), DuplicatePolicy::Warn);
    cache.get_or_generate(&request).unwrap();

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.misses(), 1);
}
