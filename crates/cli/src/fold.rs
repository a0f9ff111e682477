// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case folding with offset tracking.
//!
//! Lower-casing can change the number of characters in a string: `İ`
//! (U+0130) folds to `i` followed by U+0307 COMBINING DOT ABOVE. Matches are
//! found in the folded text, so their offsets are translated back through an
//! [`IndexMapping`] before being reported.
//!
//! Folding is done per character (never `str::to_lowercase`) so patterns and
//! input text always fold the same way regardless of context.

use std::ops::Range;

/// Maps character offsets in folded text back to the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexMapping {
    /// Folding did not change the length; offsets pass through.
    Identity,
    /// `table[i]` is the original index of folded character `i`.
    Table(Vec<usize>),
}

impl IndexMapping {
    /// Translate a folded `[start, end)` span to original coordinates.
    pub fn span(&self, start: usize, end: usize) -> (usize, usize) {
        match self {
            IndexMapping::Identity => (start, end),
            IndexMapping::Table(table) => {
                if end <= start {
                    let at = table.get(start).copied().unwrap_or(start);
                    return (at, at);
                }
                let first = table.get(start).copied().unwrap_or(start);
                let last = table.get(end - 1).map_or(end, |&i| i + 1);
                (first, last)
            }
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, IndexMapping::Identity)
    }
}

/// Input text prepared for scanning.
#[derive(Debug, Clone)]
pub struct FoldedText {
    pub chars: Vec<char>,
    pub mapping: IndexMapping,
}

/// Fold a pattern into the character sequence stored in the trie.
pub fn fold_pattern(pattern: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        pattern.chars().collect()
    } else {
        pattern.chars().flat_map(char::to_lowercase).collect()
    }
}

/// Fold input text, building an offset table only when folding changes the
/// character count.
pub fn fold_text(text: &str, case_sensitive: bool) -> FoldedText {
    if case_sensitive {
        return FoldedText {
            chars: text.chars().collect(),
            mapping: IndexMapping::Identity,
        };
    }

    let mut chars = Vec::with_capacity(text.len());
    let mut table: Option<Vec<usize>> = None;

    for (idx, c) in text.chars().enumerate() {
        let before = chars.len();
        chars.extend(c.to_lowercase());
        let added = chars.len() - before;

        if added != 1 && table.is_none() {
            table = Some((0..before).collect());
        }
        if let Some(table) = table.as_mut() {
            table.extend(std::iter::repeat_n(idx, added));
        }
    }

    FoldedText {
        chars,
        mapping: table.map_or(IndexMapping::Identity, IndexMapping::Table),
    }
}

/// Convert a character range of `text` into a byte range.
///
/// Returns `None` when the range falls outside the text.
pub fn byte_range(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    if start > end {
        return None;
    }
    let mut boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    let byte_start = boundaries.nth(start)?;
    let byte_end = if end == start {
        byte_start
    } else {
        boundaries.nth(end - start - 1)?
    };
    Some(byte_start..byte_end)
}

#[cfg(test)]
#[path = "fold_tests.rs"]
mod tests;
