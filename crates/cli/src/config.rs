// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles flashtrie.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::matcher::{DEFAULT_MAX_FUZZY_WORD_LEN, MatcherConfig};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    matcher: Option<toml::Value>,

    #[serde(default)]
    extract: Option<toml::Value>,

    #[serde(default)]
    sources: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// How patterns and input are compared.
    #[serde(default)]
    pub matcher: MatcherSection,

    /// Extraction defaults.
    #[serde(default)]
    pub extract: ExtractSection,

    /// Keyword files loaded on startup.
    #[serde(default)]
    pub sources: SourcesSection,
}

/// `[matcher]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherSection {
    pub case_sensitive: bool,

    /// Characters treated as part of a word in addition to ASCII
    /// alphanumerics and `_`.
    pub word_chars: String,

    /// Replaces the default fuzzy boundary characters when set.
    pub boundary_chars: Option<String>,

    pub max_fuzzy_word_len: usize,
}

impl Default for MatcherSection {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            word_chars: String::new(),
            boundary_chars: None,
            max_fuzzy_word_len: DEFAULT_MAX_FUZZY_WORD_LEN,
        }
    }
}

/// `[extract]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSection {
    /// Edits tolerated per match (0 disables fuzzy matching).
    pub max_cost: usize,
}

/// `[sources]` section.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesSection {
    /// Pattern-list files (`pattern` or `pattern=>value` per line).
    pub lists: Vec<PathBuf>,

    /// Keyword tables in TOML or JSON.
    pub tables: Vec<PathBuf>,
}

impl SourcesSection {
    fn resolve_against(&mut self, base: &Path) {
        for path in self.lists.iter_mut().chain(self.tables.iter_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl Config {
    /// Matcher settings described by the `[matcher]` section.
    pub fn to_matcher_config(&self) -> MatcherConfig {
        let section = &self.matcher;
        let mut config = MatcherConfig::default()
            .case_sensitive(section.case_sensitive)
            .with_word_chars(section.word_chars.chars())
            .with_max_fuzzy_word_len(section.max_fuzzy_word_len);
        if let Some(boundary) = &section.boundary_chars {
            config = config.with_boundary_chars(boundary.chars());
        }
        config
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "flashtrie.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "matcher", "extract", "sources"];

const KNOWN_MATCHER_KEYS: &[&str] = &[
    "case_sensitive",
    "word_chars",
    "boundary_chars",
    "max_fuzzy_word_len",
];

const KNOWN_EXTRACT_KEYS: &[&str] = &["max_cost"];

const KNOWN_SOURCES_KEYS: &[&str] = &["lists", "tables"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    let mut config = parse(&content, path)?;
    config.sources.resolve_against(base_dir(path));
    Ok(config)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    let mut config = parse_with_warnings(&content, path)?;
    config.sources.resolve_against(base_dir(path));
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config from string content (strict mode).
///
/// Source paths are returned as written.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    toml::from_str(content).map_err(|e| config_error(e.to_string(), path))
}

/// Parse config, warning on unknown keys.
///
/// Source paths are returned as written.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    Ok(Config {
        version: flexible.version,
        matcher: parse_section(flexible.matcher, "matcher", KNOWN_MATCHER_KEYS, path)?,
        extract: parse_section(flexible.extract, "extract", KNOWN_EXTRACT_KEYS, path)?,
        sources: parse_section(flexible.sources, "sources", KNOWN_SOURCES_KEYS, path)?,
    })
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string(), path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade flashtrie to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }
    Ok(())
}

/// Deserialize one section after dropping (and warning about) unknown keys.
fn parse_section<T>(value: Option<toml::Value>, name: &str, known: &[&str], path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };
    let toml::Value::Table(mut table) = value else {
        return Err(config_error(format!("[{}] must be a table", name), path));
    };

    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in unknown {
        warn_unknown_key(path, &format!("{}.{}", name, key));
        table.remove(&key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e| config_error(format!("[{}]: {}", name, e), path))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn config_error(message: String, path: &Path) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "flashtrie: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
