// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk keyword loading.
//!
//! Two on-disk formats are understood:
//!
//! - Pattern lists: one pattern per line, optionally `pattern=>value`.
//!   A bare line uses the pattern itself as the value.
//! - Keyword tables (TOML or JSON): each key is a value and maps to the list
//!   of patterns that should produce it.
//!
//! ```text
//! java_2e=>java
//! java programing=>java
//! python
//! ```
//!
//! ```toml
//! java = ["java_2e", "java programing"]
//! "product management" = ["PM", "product manager"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::matcher::KeywordMatcher;

/// Separator between pattern and value in a pattern-list line.
pub const VALUE_SEPARATOR: &str = "=>";

/// One line of a pattern list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: String,
    pub value: String,
}

/// Parse pattern-list content.
///
/// Blank lines and `pattern=>` lines without a value are skipped.
pub fn parse_pattern_list(content: &str) -> Vec<PatternEntry> {
    content
        .lines()
        .filter_map(|line| match line.split_once(VALUE_SEPARATOR) {
            Some((pattern, value)) => {
                let value = value.trim();
                (!value.is_empty()).then(|| PatternEntry {
                    pattern: pattern.to_string(),
                    value: value.to_string(),
                })
            }
            None => {
                let pattern = line.trim();
                (!pattern.is_empty()).then(|| PatternEntry {
                    pattern: pattern.to_string(),
                    value: pattern.to_string(),
                })
            }
        })
        .collect()
}

/// Read and parse a pattern-list file.
pub fn read_pattern_list(path: &Path) -> Result<Vec<PatternEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_pattern_list(&content))
}

/// Register every entry of the pattern-list file at `path`.
///
/// Returns the number of newly registered patterns. Nothing is registered if
/// the file cannot be read.
pub fn add_keywords_from_file<V>(matcher: &mut KeywordMatcher<V>, path: &Path) -> Result<usize>
where
    V: for<'a> From<&'a str>,
{
    let entries = read_pattern_list(path)?;
    let added = entries
        .iter()
        .filter(|entry| matcher.add(&entry.pattern, V::from(entry.value.as_str())))
        .count();
    tracing::debug!(
        "loaded {} patterns ({} new) from {}",
        entries.len(),
        added,
        path.display()
    );
    Ok(added)
}

/// Register each pattern with itself as the value.
pub fn add_keywords_from_list<V, S>(matcher: &mut KeywordMatcher<V>, patterns: &[S]) -> usize
where
    V: for<'a> From<&'a str>,
    S: AsRef<str>,
{
    patterns
        .iter()
        .filter(|pattern| matcher.add_keyword(pattern.as_ref()))
        .count()
}

/// Unregister each pattern. Returns how many were registered.
pub fn remove_keywords_from_list<V, S>(matcher: &mut KeywordMatcher<V>, patterns: &[S]) -> usize
where
    S: AsRef<str>,
{
    patterns
        .iter()
        .filter(|pattern| matcher.remove(pattern.as_ref()))
        .count()
}

/// Register every pattern of `map` with the key it is listed under as value.
pub fn add_keywords_from_map<V, S>(matcher: &mut KeywordMatcher<V>, map: &BTreeMap<S, Vec<S>>) -> usize
where
    V: for<'a> From<&'a str>,
    S: AsRef<str>,
{
    let mut added = 0;
    for (value, patterns) in map {
        for pattern in patterns {
            if matcher.add(pattern.as_ref(), V::from(value.as_ref())) {
                added += 1;
            }
        }
    }
    added
}

/// Unregister every pattern listed in `map`.
pub fn remove_keywords_from_map<V, S>(matcher: &mut KeywordMatcher<V>, map: &BTreeMap<S, Vec<S>>) -> usize
where
    S: AsRef<str>,
{
    map.values()
        .flatten()
        .filter(|pattern| matcher.remove(pattern.as_ref()))
        .count()
}

/// Keyword table parsed from TOML or JSON.
///
/// Parsing validates the whole table up front, so a malformed entry means
/// nothing is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl KeywordTable {
    /// Load a table, choosing the format from the file extension
    /// (`.json` is JSON, anything else TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content, path)
        } else {
            Self::from_toml_str(&content, path)
        }
    }

    /// `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let entries = toml::from_str(content).map_err(|e| source_error(path, &e.to_string()))?;
        Ok(Self { entries })
    }

    /// `path` is only used in error messages.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self> {
        let entries = serde_json::from_str(content).map_err(|e| source_error(path, &e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    /// Number of patterns across all values.
    pub fn pattern_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn register<V>(&self, matcher: &mut KeywordMatcher<V>) -> usize
    where
        V: for<'a> From<&'a str>,
    {
        add_keywords_from_map(matcher, &self.entries)
    }

    pub fn unregister<V>(&self, matcher: &mut KeywordMatcher<V>) -> usize {
        remove_keywords_from_map(matcher, &self.entries)
    }
}

fn source_error(path: &Path, message: &str) -> Error {
    Error::Source {
        path: PathBuf::from(path),
        message: message.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
