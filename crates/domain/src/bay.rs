// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bay identifier normalization and parsing.
//!
//! Bay codes in the wild mix separators (`-`, `_`, spaces, en and em
//! dashes), case, and segment counts. Two operations cope with that:
//!
//! - [`normalize_bay_id`] always succeeds and produces the canonical form
//!   used for every equality comparison.
//! - [`parse_bay_id`] attempts a structural decomposition and returns
//!   `None` for anything that does not look like a bay code.

use serde::{Deserialize, Serialize};

/// The literal prefix accepted in front of the first numeric block.
const BAY_PREFIX: &str = "BAY";

/// Maximum number of digits in a single numeric block.
const MAX_BLOCK_DIGITS: usize = 4;

/// Length of the digit run used when no trailing number block is present.
const FALLBACK_NUMBER_DIGITS: usize = 3;

/// Returns whether a character belongs to a separator run collapsed by
/// normalization.
fn is_normalized_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '\u{2013}' | '\u{2014}') || c.is_whitespace()
}

/// Returns whether a character separates numeric blocks in a bay code.
fn is_block_separator(c: char) -> bool {
    matches!(c, '-' | '_') || c.is_whitespace()
}

/// Returns whether a character counts as a word character for boundary
/// purposes.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Produces the canonical form of a bay identifier.
///
/// The input is trimmed and uppercased, then every run of separators
/// (hyphen, underscore, en dash, em dash, whitespace) collapses to a
/// single hyphen. The result is idempotent under re-normalization.
#[must_use]
pub fn normalize_bay_id(raw: &str) -> String {
    let upper: String = raw.trim().to_uppercase();
    let mut normalized: String = String::with_capacity(upper.len());
    let mut in_separator_run: bool = false;

    for c in upper.chars() {
        if is_normalized_separator(c) {
            if !in_separator_run {
                normalized.push('-');
                in_separator_run = true;
            }
        } else {
            normalized.push(c);
            in_separator_run = false;
        }
    }

    normalized
}

/// A bay identifier as entered, paired with its canonical form.
///
/// Equality and hashing use the normalized form only, so `"bay_001"` and
/// `"BAY-001"` are the same bay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayId {
    raw: String,
    normalized: String,
}

impl PartialEq for BayId {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for BayId {}

impl std::hash::Hash for BayId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl BayId {
    /// Creates a new `BayId` from user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: normalize_bay_id(raw),
        }
    }

    /// Returns the identifier exactly as entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the canonical form.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Attempts a structural parse of the raw identifier.
    #[must_use]
    pub fn parse(&self) -> Option<ParsedBay> {
        parse_bay_id(&self.raw)
    }
}

/// The structural components of a bay code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBay {
    /// The trimmed input.
    pub raw: String,
    /// The first numeric block (1-4 digits).
    pub aisle: String,
    /// The second numeric block, when present.
    pub section: Option<String>,
    /// The numeric suffix that bin positions increment from.
    /// Empty when no suffix could be recovered.
    pub number: String,
}

impl ParsedBay {
    /// Returns the numeric value of `number`, if it has one.
    #[must_use]
    pub fn base_number(&self) -> Option<u64> {
        if self.number.is_empty() || !self.number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.number.parse::<u64>().ok()
    }
}

/// A forward-only reader over a trimmed bay code.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        let input: &'a str = self.input;
        &input[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes a case-insensitive `BAY` literal and at most one separator.
    fn skip_bay_prefix(&mut self) {
        let rest: &str = self.rest();
        let Some(head) = rest.get(..BAY_PREFIX.len()) else {
            return;
        };
        if !head.eq_ignore_ascii_case(BAY_PREFIX) {
            return;
        }
        self.pos += BAY_PREFIX.len();
        if let Some(c) = self.rest().chars().next()
            && is_block_separator(c)
        {
            self.pos += c.len_utf8();
        }
    }

    /// Length in bytes of the digit run at the cursor.
    fn digit_run_len(&self) -> usize {
        self.rest().bytes().take_while(u8::is_ascii_digit).count()
    }

    /// Consumes a numeric block of 1-4 digits.
    ///
    /// Longer runs are rejected outright since a block must end at a
    /// separator or at the end of the input.
    fn digit_block(&mut self) -> Option<&'a str> {
        let len: usize = self.digit_run_len();
        if len == 0 || len > MAX_BLOCK_DIGITS {
            return None;
        }
        let input: &'a str = self.input;
        let block: &'a str = &input[self.pos..self.pos + len];
        self.pos += len;
        Some(block)
    }

    /// Consumes a separator followed by a numeric block, or nothing.
    fn separated_block(&mut self) -> Option<&'a str> {
        let sep: char = self.rest().chars().next()?;
        if !is_block_separator(sep) {
            return None;
        }
        let start: usize = self.pos;
        self.pos += sep.len_utf8();
        let block: Option<&'a str> = self.digit_block();
        if block.is_none() {
            self.pos = start;
        }
        block
    }
}

/// Finds the last three-digit run that ends on a word boundary.
///
/// Within a longer digit run only its final three digits qualify.
fn last_boundary_digit_run(input: &str) -> Option<&str> {
    let bytes: &[u8] = input.as_bytes();
    let mut found: Option<&str> = None;
    let mut i: usize = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start: usize = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let at_boundary: bool = input[i..].chars().next().is_none_or(|c| !is_word_char(c));
        if i - start >= FALLBACK_NUMBER_DIGITS && at_boundary {
            found = Some(&input[i - FALLBACK_NUMBER_DIGITS..i]);
        }
    }

    found
}

/// Parses a bay identifier into its structural components.
///
/// The accepted shape is an optional case-insensitive `BAY` literal
/// (optionally followed by one separator), then up to three numeric
/// blocks of 1-4 digits each, separated by a single `-`, `_`, or
/// whitespace character. The blocks are the aisle, section, and number.
///
/// When the number block is missing, the last three-digit run in the input
/// that ends on a word boundary stands in for it. If there is none,
/// `number` is empty.
///
/// # Returns
///
/// * `Some(ParsedBay)` when the input has the shape of a bay code
/// * `None` for empty input or anything else
///
/// Only ASCII digits count as digits, so an identifier written with other
/// Unicode digits yields `None`.
#[must_use]
pub fn parse_bay_id(raw: &str) -> Option<ParsedBay> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cursor: Cursor<'_> = Cursor::new(trimmed);
    cursor.skip_bay_prefix();
    let aisle: &str = cursor.digit_block()?;
    let section: Option<&str> = cursor.separated_block();
    let number: Option<&str> = section.and_then(|_| cursor.separated_block());

    if !cursor.is_at_end() {
        return None;
    }

    let number: &str = number
        .or_else(|| last_boundary_digit_run(raw))
        .unwrap_or_default();

    Some(ParsedBay {
        raw: trimmed.to_string(),
        aisle: aisle.to_string(),
        section: section.map(str::to_string),
        number: number.to_string(),
    })
}
