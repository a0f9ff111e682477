// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction over many inputs.
//!
//! Inputs are independent, so they are searched in parallel against one
//! shared matcher. Results keep input order.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::extract::ExtractedMatch;
use crate::matcher::KeywordMatcher;

/// A keyword found in one input, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub value: String,
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
    /// The matched slice of the input, as written.
    pub text: String,
}

impl MatchRecord {
    pub fn new(found: &ExtractedMatch<&String>, input: &str) -> Self {
        Self {
            value: found.value.clone(),
            start: found.start,
            end: found.end,
            text: found.matched_text(input).to_string(),
        }
    }
}

/// Every keyword found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    /// 1-based position of the input (line number for line input).
    pub input: usize,
    pub matches: Vec<MatchRecord>,
}

/// Inputs for an extraction run.
///
/// Explicit `texts` win; otherwise lines are read from `file`, or from stdin
/// when no file is given.
pub fn read_inputs(texts: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts.to_vec());
    }

    match file {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(content.lines().map(String::from).collect())
        }
        None => read_lines(std::io::stdin().lock(), Path::new("<stdin>")),
    }
}

/// Collect lines from `reader`. `origin` names it in errors.
pub fn read_lines(reader: impl BufRead, origin: &Path) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::Io {
            path: PathBuf::from(origin),
            source: e,
        })
}

/// Extract from every input in parallel.
pub fn extract_all(
    matcher: &KeywordMatcher<String>,
    inputs: &[String],
    max_cost: usize,
) -> Vec<InputReport> {
    let reports: Vec<InputReport> = inputs
        .par_iter()
        .enumerate()
        .map(|(idx, text)| InputReport {
            input: idx + 1,
            matches: matcher
                .extract_spans_fuzzy(text, max_cost)
                .iter()
                .map(|found| MatchRecord::new(found, text))
                .collect(),
        })
        .collect();

    tracing::debug!(
        "searched {} inputs, {} matches",
        reports.len(),
        reports.iter().map(|r| r.matches.len()).sum::<usize>()
    );
    reports
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
