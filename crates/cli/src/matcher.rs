// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword matcher: trie store, mutation API and extraction entry points.
//!
//! ```
//! use flashtrie::KeywordMatcher;
//!
//! let mut matcher = KeywordMatcher::new();
//! matcher.add("Big Apple", "New York");
//! matcher.add("Bay Area", "Bay Area");
//!
//! let found = matcher.extract_fuzzy("I love Big Aple and Baay Area.", 1);
//! assert_eq!(found, vec![&"New York", &"Bay Area"]);
//! ```

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::extract::{self, ExtractedMatch};
use crate::fold;
use crate::trie::Trie;

/// Characters that terminate a fuzzy lookahead by default.
pub const DEFAULT_BOUNDARY_CHARS: &[char] = &['.', '\t', '\n', '\x07', ' ', ','];

/// Longest word considered for a single fuzzy step by default.
pub const DEFAULT_MAX_FUZZY_WORD_LEN: usize = 64;

/// A set of characters with a fast path for ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    ascii: [bool; 128],
    other: BTreeSet<char>,
}

impl CharSet {
    pub fn empty() -> Self {
        Self {
            ascii: [false; 128],
            other: BTreeSet::new(),
        }
    }

    /// ASCII letters, digits and `_`.
    pub fn word_default() -> Self {
        let mut set = Self::empty();
        set.extend(('a'..='z').chain('A'..='Z').chain('0'..='9'));
        set.insert('_');
        set
    }

    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii[c as usize] = true;
        } else {
            self.other.insert(c);
        }
    }

    pub fn remove(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii[c as usize] = false;
        } else {
            self.other.remove(&c);
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.other.contains(&c)
        }
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

/// Matcher settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Match case exactly instead of folding patterns and input.
    pub case_sensitive: bool,
    /// Characters that continue a word. Anything else is a word boundary.
    pub word_chars: CharSet,
    /// Characters that end a fuzzy lookahead.
    pub boundary_chars: CharSet,
    /// Words longer than this are never matched fuzzily.
    pub max_fuzzy_word_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            word_chars: CharSet::word_default(),
            boundary_chars: DEFAULT_BOUNDARY_CHARS.iter().copied().collect(),
            max_fuzzy_word_len: DEFAULT_MAX_FUZZY_WORD_LEN,
        }
    }
}

impl MatcherConfig {
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Treat `chars` as word characters in addition to the current set.
    pub fn with_word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.word_chars.extend(chars);
        self
    }

    /// Replace the fuzzy boundary set.
    pub fn with_boundary_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.boundary_chars = chars.into_iter().collect();
        self
    }

    pub fn with_max_fuzzy_word_len(mut self, len: usize) -> Self {
        self.max_fuzzy_word_len = len;
        self
    }
}

/// Extracts registered keywords from text, mapping each to its value.
///
/// Built once and then shared read-only: extraction takes `&self`, so a
/// matcher can serve many threads, while mutation needs `&mut self`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher<V> {
    trie: Trie<V>,
    config: MatcherConfig,
}

impl<V> Default for KeywordMatcher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeywordMatcher<V> {
    /// Case-insensitive matcher with default word characters.
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            trie: Trie::new(),
            config,
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Number of distinct registered patterns.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Trie nodes currently in use.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Register `pattern` with `value`.
    ///
    /// Returns `true` if the pattern is new. An existing pattern has its value
    /// replaced and `false` is returned. Empty patterns are ignored.
    pub fn add(&mut self, pattern: &str, value: V) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let key = self.fold(pattern);
        self.trie.insert(&key, value).is_none()
    }

    /// Unregister `pattern`. Returns `false` if it was not registered.
    pub fn remove(&mut self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let key = self.fold(pattern);
        self.trie.remove(&key).is_some()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.get(pattern).is_some()
    }

    /// Value registered for exactly `pattern`.
    pub fn get(&self, pattern: &str) -> Option<&V> {
        if pattern.is_empty() {
            return None;
        }
        self.trie.get(&self.fold(pattern))
    }

    /// Every registered pattern with its value.
    ///
    /// Patterns come back case-folded when the matcher is case-insensitive.
    pub fn keywords(&self) -> BTreeMap<String, &V> {
        self.trie.entries().into_iter().collect()
    }

    /// Values of all keywords found in `text`, in order of appearance.
    pub fn extract(&self, text: &str) -> Vec<&V> {
        self.extract_fuzzy(text, 0)
    }

    /// Like [`extract`](Self::extract), tolerating up to `max_cost` edits per
    /// match.
    pub fn extract_fuzzy(&self, text: &str, max_cost: usize) -> Vec<&V> {
        self.extract_spans_fuzzy(text, max_cost)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Keywords found in `text` with their character spans.
    pub fn extract_spans(&self, text: &str) -> Vec<ExtractedMatch<&V>> {
        self.extract_spans_fuzzy(text, 0)
    }

    pub fn extract_spans_fuzzy(&self, text: &str, max_cost: usize) -> Vec<ExtractedMatch<&V>> {
        extract::extract(&self.trie, &self.config, text, max_cost)
    }

    fn fold(&self, pattern: &str) -> Vec<char> {
        fold::fold_pattern(pattern, self.config.case_sensitive)
    }
}

impl<V> KeywordMatcher<V>
where
    V: for<'a> From<&'a str>,
{
    /// Register `pattern` with itself as the value.
    pub fn add_keyword(&mut self, pattern: &str) -> bool {
        self.add(pattern, V::from(pattern))
    }
}

impl<S: AsRef<str>, V> Extend<(S, V)> for KeywordMatcher<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (pattern, value) in iter {
            self.add(pattern.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for KeywordMatcher<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut matcher = Self::new();
        matcher.extend(iter);
        matcher
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
