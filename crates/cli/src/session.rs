// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matcher assembly from config and command-line sources.

use std::path::Path;

use crate::cli::SourceArgs;
use crate::config::{self, Config, SUPPORTED_VERSION};
use crate::discovery;
use crate::error::Result;
use crate::loader::{self, KeywordTable};
use crate::matcher::KeywordMatcher;

/// Load the explicit or discovered config, or defaults when there is none.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => config::load_with_warnings(&path),
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config {
                version: SUPPORTED_VERSION,
                ..Config::default()
            })
        }
    }
}

/// Build a matcher from `[matcher]` settings and every keyword source.
///
/// Pattern lists are applied first, then keyword tables, then inline
/// keywords; within each kind, config sources come before command-line ones.
/// A later source replaces the value of a pattern registered by an earlier
/// one.
pub fn build_matcher(config: &Config, args: &SourceArgs) -> Result<KeywordMatcher<String>> {
    let mut matcher_config = config.to_matcher_config();
    if args.case_sensitive {
        matcher_config = matcher_config.case_sensitive(true);
    }
    let mut matcher = KeywordMatcher::with_config(matcher_config);

    let (config_lists, config_tables) = if args.no_config_sources {
        (&[][..], &[][..])
    } else {
        (&config.sources.lists[..], &config.sources.tables[..])
    };

    // Parse every table before registering anything.
    let tables = config_tables
        .iter()
        .chain(&args.tables)
        .map(|path| KeywordTable::load(path))
        .collect::<Result<Vec<_>>>()?;

    for path in config_lists.iter().chain(&args.pattern_files) {
        loader::add_keywords_from_file(&mut matcher, path)?;
    }
    for table in &tables {
        table.register(&mut matcher);
    }
    for entry in args.keywords.iter().flat_map(|k| loader::parse_pattern_list(k)) {
        matcher.add(&entry.pattern, entry.value);
    }

    tracing::debug!(
        "matcher ready with {} keywords ({} trie nodes)",
        matcher.len(),
        matcher.node_count()
    );
    Ok(matcher)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
