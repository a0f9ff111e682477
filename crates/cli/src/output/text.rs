// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Extraction prints one value per line, or with `--spans`:
//! ```text
//! <input>:<start>-<end>: <matched text> => <value>
//! ```
//! Listings print `<pattern> => <value>` per keyword.

use std::collections::BTreeMap;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::batch::{InputReport, MatchRecord};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    matches_shown: usize,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            matches_shown: 0,
        }
    }

    /// Write the matches of one input. Inputs without matches print nothing.
    pub fn write_report(&mut self, report: &InputReport) -> std::io::Result<()> {
        for record in &report.matches {
            if self.options.spans {
                self.write_span(report.input, record)?;
            }
            self.out.set_color(&scheme::value())?;
            write!(self.out, "{}", record.value)?;
            self.out.reset()?;
            writeln!(self.out)?;
            self.matches_shown += 1;
        }
        Ok(())
    }

    fn write_span(&mut self, input: usize, record: &MatchRecord) -> std::io::Result<()> {
        self.out.set_color(&scheme::input())?;
        write!(self.out, "{}", input)?;
        self.out.reset()?;
        write!(self.out, ":")?;

        self.out.set_color(&scheme::span())?;
        write!(self.out, "{}-{}", record.start, record.end)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", record.text)?;
        self.out.reset()?;
        write!(self.out, " => ")
    }

    /// Write every keyword with its value, one per line.
    pub fn write_keywords(&mut self, keywords: &BTreeMap<String, &String>) -> std::io::Result<()> {
        for (pattern, value) in keywords {
            self.out.set_color(&scheme::pattern())?;
            write!(self.out, "{}", pattern)?;
            self.out.reset()?;
            write!(self.out, " => ")?;
            self.out.set_color(&scheme::value())?;
            write!(self.out, "{}", value)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Number of matches written so far.
    pub fn matches_shown(&self) -> usize {
        self.matches_shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
