// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::batch::InputReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Extraction output.
#[derive(Debug, Serialize)]
struct ExtractOutput<'a> {
    /// Some input contained a keyword.
    matched: bool,
    /// Total matches across inputs.
    count: usize,
    inputs: &'a [InputReport],
}

/// Keyword listing output.
#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    count: usize,
    keywords: &'a BTreeMap<String, &'a String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write all extraction reports as one document.
    pub fn write_extraction(&mut self, reports: &[InputReport]) -> std::io::Result<()> {
        let count = reports.iter().map(|r| r.matches.len()).sum();
        self.write_json(&ExtractOutput {
            matched: count > 0,
            count,
            inputs: reports,
        })
    }

    /// Write the keyword table as one document.
    pub fn write_keywords(&mut self, keywords: &BTreeMap<String, &String>) -> std::io::Result<()> {
        self.write_json(&ListOutput {
            count: keywords.len(),
            keywords,
        })
    }

    fn write_json(&mut self, value: &impl Serialize) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
