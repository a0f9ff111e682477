// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass keyword extraction.
//!
//! A [`KeywordMatcher`] stores patterns in a character trie and finds every
//! whole-word, non-overlapping, longest keyword in a text in one scan,
//! optionally tolerating a Levenshtein edit budget per match.

pub mod batch;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod extract;
pub mod loader;
pub mod matcher;
pub mod output;
pub mod session;

mod fold;
mod fuzzy;
mod trie;

pub use batch::{InputReport, MatchRecord};
pub use cli::{Cli, Command, ExtractArgs, ListArgs, OutputFormat, SourceArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use extract::ExtractedMatch;
pub use loader::{KeywordTable, PatternEntry};
pub use matcher::{CharSet, KeywordMatcher, MatcherConfig};

#[cfg(test)]
pub mod test_utils;
