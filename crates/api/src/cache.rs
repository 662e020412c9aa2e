// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Memoization of generation runs.
//!
//! A run is keyed on a fingerprint of its inputs. Two requests with the
//! same groups and policy share a fingerprint and therefore a result.

use crate::error::ApiResult;
use bin_labels::{DuplicatePolicy, Generation, GenerationRequest, generate};
use bin_labels_domain::BayGroup;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Number of results kept by [`GenerationCache::default`].
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// The hashed view of a request.
#[derive(Serialize)]
struct FingerprintInput<'a> {
    groups: &'a [BayGroup],
    policy: DuplicatePolicy,
}

/// Computes the fingerprint of a set of groups and a duplicate policy.
///
/// The fingerprint is the lowercase hex SHA-256 of the inputs' JSON form.
/// Bin counts are held in ordered maps, so equal inputs always serialize
/// identically.
///
/// # Errors
///
/// Returns an error if the inputs cannot be serialized.
pub fn input_fingerprint(groups: &[BayGroup], policy: DuplicatePolicy) -> ApiResult<String> {
    let bytes: Vec<u8> = serde_json::to_vec(&FingerprintInput { groups, policy })?;
    let mut hasher: Sha256 = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// A bounded cache of generation results.
///
/// When full, the oldest entry is evicted first. Failed runs are not
/// cached.
#[derive(Debug)]
pub struct GenerationCache {
    capacity: usize,
    entries: HashMap<String, Generation>,
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl GenerationCache {
    /// Creates an empty cache holding at most `capacity` results.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity: usize = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the maximum number of cached results.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of lookups answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns the number of lookups that ran a generation.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every cached result. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Returns the cached result for `request`, generating it on a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be fingerprinted or the
    /// generation fails.
    pub fn get_or_generate(&mut self, request: &GenerationRequest) -> ApiResult<Generation> {
        let key: String = input_fingerprint(&request.groups, request.policy)?;

        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            debug!(fingerprint = %key, "Generation cache hit");
            return Ok(cached.clone());
        }

        self.misses += 1;
        debug!(fingerprint = %key, "Generation cache miss");
        let generation: Generation = generate(request)?;
        self.insert(key, generation.clone());
        Ok(generation)
    }

    fn insert(&mut self, key: String, generation: Generation) {
        while self.order.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            debug!(fingerprint = %oldest, "Evicted cached generation");
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, generation);
    }
}
