// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass longest-match extraction.
//!
//! The scanner walks the folded input once, left to right, keeping a cursor
//! into the trie and the offset where the current candidate started.
//!
//! - Word characters advance the cursor along trie edges.
//! - A non-word character is where a match may end: the scanner looks ahead
//!   from the cursor for the longest keyword that ends on a non-word
//!   character (or at the end of input) and emits it.
//! - When no edge continues the cursor and fuzzy budget remains, the whole
//!   next run of word characters is consumed as one fuzzy step.
//! - Otherwise the rest of the current word is skipped.
//!
//! Emitted matches never overlap; scanning resumes right after each one.

use serde::Serialize;

use crate::fold::{self, IndexMapping};
use crate::fuzzy::{self, FuzzyHit};
use crate::matcher::MatcherConfig;
use crate::trie::{NodeId, Trie};

/// A keyword found in the input.
///
/// `start` and `end` (exclusive) are character offsets into the original,
/// unfolded input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedMatch<V> {
    pub value: V,
    pub start: usize,
    pub end: usize,
}

impl<V> ExtractedMatch<V> {
    /// Slice of `text` covered by this match.
    ///
    /// `text` must be the string the match was extracted from; returns an
    /// empty string if the offsets do not fit it.
    pub fn matched_text<'t>(&self, text: &'t str) -> &'t str {
        fold::byte_range(text, self.start, self.end)
            .and_then(|range| text.get(range))
            .unwrap_or_default()
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> ExtractedMatch<U> {
        ExtractedMatch {
            value: f(self.value),
            start: self.start,
            end: self.end,
        }
    }
}

/// Extract every non-overlapping longest match from `text`.
pub(crate) fn extract<'t, V>(
    trie: &'t Trie<V>,
    config: &MatcherConfig,
    text: &str,
    max_cost: usize,
) -> Vec<ExtractedMatch<&'t V>> {
    if text.is_empty() || trie.is_empty() {
        return Vec::new();
    }

    let folded = fold::fold_text(text, config.case_sensitive);
    if !folded.mapping.is_identity() {
        tracing::trace!("folding changed length: {} chars", folded.chars.len());
    }
    let scanner = Scanner {
        trie,
        config,
        chars: &folded.chars,
        mapping: &folded.mapping,
        max_cost,
        budget: max_cost,
        matches: Vec::new(),
    };
    scanner.run()
}

struct Scanner<'s, 't, V> {
    trie: &'t Trie<V>,
    config: &'s MatcherConfig,
    chars: &'s [char],
    mapping: &'s IndexMapping,
    max_cost: usize,
    /// Fuzzy budget left for the current candidate.
    budget: usize,
    matches: Vec<ExtractedMatch<&'t V>>,
}

impl<'t, V> Scanner<'_, 't, V> {
    fn run(mut self) -> Vec<ExtractedMatch<&'t V>> {
        let len = self.chars.len();
        let mut node = NodeId::ROOT;
        let mut start = 0;
        let mut idx = 0;

        while idx < len {
            let ch = self.chars[idx];
            let mut reset = false;

            if !self.is_word(ch) {
                if self.trie.is_terminal(node) || self.trie.child(node, ch).is_some() {
                    if let Some((value, end)) = self.longest_from(node, idx) {
                        self.emit(value, start, end);
                        idx = end;
                    }
                }
                node = NodeId::ROOT;
                reset = true;
            } else if let Some(next) = self.trie.child(node, ch) {
                node = next;
            } else if self.budget > 0 {
                let word_len = self.word_len_at(idx);
                node = match self.fuzzy_step(node, idx, word_len) {
                    Some(hit) => hit.node,
                    None => NodeId::ROOT,
                };
                idx += word_len - 1;
            } else {
                node = NodeId::ROOT;
                reset = true;
                idx = self.word_end(idx + 1);
            }

            if idx + 1 >= len
                && let Some(value) = self.trie.value(node)
            {
                self.emit(value, start, len);
            }

            idx += 1;
            if reset {
                start = idx;
            }
        }

        self.matches
    }

    /// Look ahead from `node` at the non-word character `self.chars[at]`.
    ///
    /// Returns the longest keyword value reachable together with the
    /// exclusive end offset of its match.
    fn longest_from(&mut self, node: NodeId, at: usize) -> Option<(&'t V, usize)> {
        let len = self.chars.len();
        let mut longest = self.trie.value(node).map(|value| (value, at));

        let Some(mut cursor) = self.trie.child(node, self.chars[at]) else {
            return longest;
        };

        let mut idy = at + 1;
        while idy < len {
            let inner = self.chars[idy];
            if !self.is_word(inner)
                && let Some(value) = self.trie.value(cursor)
            {
                longest = Some((value, idy));
            }

            if let Some(next) = self.trie.child(cursor, inner) {
                cursor = next;
            } else if self.budget > 0 {
                let word_len = self.word_len_at(idy);
                match self.fuzzy_step(cursor, idy, word_len) {
                    Some(hit) => {
                        cursor = hit.node;
                        idy += word_len - 1;
                    }
                    None => return longest,
                }
            } else {
                return longest;
            }
            idy += 1;
        }

        if let Some(value) = self.trie.value(cursor) {
            longest = Some((value, len));
        }
        longest
    }

    /// Match the word of `word_len` characters at `at` fuzzily from `node`,
    /// charging the cost to the budget.
    fn fuzzy_step(&mut self, node: NodeId, at: usize, word_len: usize) -> Option<FuzzyHit> {
        if word_len == 0 || word_len > self.config.max_fuzzy_word_len {
            return None;
        }

        let word = &self.chars[at..at + word_len];
        let boundary = &self.config.boundary_chars;
        let hit = fuzzy::search(self.trie, node, word, self.budget, |c| boundary.contains(c))?;

        tracing::trace!(
            "fuzzy step at {}: {:?} cost {} depth {}",
            at,
            word.iter().collect::<String>(),
            hit.cost,
            hit.depth
        );
        self.budget -= hit.cost;
        Some(hit)
    }

    fn emit(&mut self, value: &'t V, start: usize, end: usize) {
        let (start, end) = self.mapping.span(start, end);
        tracing::trace!("match {}..{}", start, end);
        self.matches.push(ExtractedMatch { value, start, end });
        self.budget = self.max_cost;
    }

    fn is_word(&self, c: char) -> bool {
        self.config.word_chars.contains(c)
    }

    /// Length of the run of word characters starting at `at`.
    fn word_len_at(&self, at: usize) -> usize {
        self.word_end(at) - at
    }

    /// First non-word position at or after `from`, or the input length.
    fn word_end(&self, from: usize) -> usize {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .position(|&c| !self.is_word(c))
            .map_or(self.chars.len(), |offset| from + offset)
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
