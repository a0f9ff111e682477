// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for flashtrie.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// SOURCES
// =============================================================================

/// > [sources] lists and tables load relative to the config file
#[test]
fn config_sources_are_loaded() {
    let temp = Project::empty();
    temp.config("[sources]\nlists = [\"keywords/cities.txt\"]\ntables = [\"labels.toml\"]\n");
    temp.file("keywords/cities.txt", "NY=>new york\n");
    temp.file("labels.toml", "\"Bay Area\" = [\"SF\", \"san francisco\"]\n");

    extract()
        .pwd(temp.path())
        .args(&["from NY to SF"])
        .passes()
        .stdout_eq("new york\nBay Area\n");
}

/// > Config is discovered from a subdirectory
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::empty();
    temp.config("[sources]\nlists = [\"cities.txt\"]\n");
    temp.file("cities.txt", "NY=>new york\n");
    temp.file("nested/deeper/.keep", "");

    extract()
        .pwd(temp.path().join("nested/deeper"))
        .args(&["I love NY"])
        .passes()
        .stdout_eq("new york\n");
}

/// > --no-config-sources ignores [sources]
#[test]
fn no_config_sources_flag() {
    let temp = Project::empty();
    temp.config("[sources]\nlists = [\"cities.txt\"]\n");
    temp.file("cities.txt", "NY=>new york\n");

    list()
        .pwd(temp.path())
        .keyword("SF")
        .args(&["--no-config-sources"])
        .passes()
        .stdout_eq("sf => SF\n");
}

/// > Command-line keywords override values from config sources
#[test]
fn inline_keyword_overrides_config_source() {
    let temp = Project::empty();
    temp.config("[sources]\nlists = [\"cities.txt\"]\n");
    temp.file("cities.txt", "NY=>new york\n");

    list()
        .pwd(temp.path())
        .keyword("NY=>NYC")
        .passes()
        .stdout_eq("ny => NYC\n");
}

// =============================================================================
// SETTINGS
// =============================================================================

/// > [extract] max_cost enables fuzzy matching by default
#[test]
fn config_max_cost() {
    let temp = Project::empty();
    temp.config("[extract]\nmax_cost = 1\n");

    extract()
        .pwd(temp.path())
        .keyword("Big Apple=>New York")
        .args(&["I love Big Aple."])
        .passes()
        .stdout_eq("New York\n");
}

/// > --max-cost overrides [extract] max_cost
#[test]
fn max_cost_flag_overrides_config() {
    let temp = Project::empty();
    temp.config("[extract]\nmax_cost = 1\n");

    extract()
        .pwd(temp.path())
        .keyword("Big Apple=>New York")
        .args(&["--max-cost", "0", "I love Big Aple."])
        .finds_nothing();
}

/// > [matcher] case_sensitive keeps case
#[test]
fn config_case_sensitive() {
    let temp = Project::empty();
    temp.config("[matcher]\ncase_sensitive = true\n");

    extract()
        .pwd(temp.path())
        .keyword("NY")
        .args(&["i love ny"])
        .finds_nothing();
}

/// > [matcher] word_chars joins words
#[test]
fn config_word_chars() {
    let temp = Project::empty();
    temp.config("[matcher]\nword_chars = \"-\"\n");

    extract()
        .pwd(temp.path())
        .keyword("new")
        .args(&["new-york"])
        .finds_nothing();
}

// =============================================================================
// VALIDATION
// =============================================================================

/// > Unknown keys warn but do not fail
#[test]
fn unknown_keys_warn() {
    let temp = Project::empty();
    temp.config("color = true\n[extract]\nmax_cost = 0\nfuzzy = true\n");

    extract()
        .pwd(temp.path())
        .keyword("NY")
        .args(&["NY"])
        .passes()
        .stderr_has("unrecognized field `color`")
        .stderr_has("unrecognized field `extract.fuzzy`");
}

/// > An unsupported version is a configuration error
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    extract()
        .pwd(temp.path())
        .keyword("NY")
        .args(&["NY"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > A missing version is a configuration error
#[test]
fn missing_version_fails() {
    let temp = Project::empty();
    temp.file("flashtrie.toml", "[extract]\nmax_cost = 1\n");

    list()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// > A wrongly typed setting is a configuration error
#[test]
fn invalid_setting_fails() {
    let temp = Project::empty();
    temp.config("[extract]\nmax_cost = \"lots\"\n");

    list().pwd(temp.path()).exits(2).stderr_has("config error");
}

/// > A missing source file named in config is an I/O error
#[test]
fn missing_config_source_fails() {
    let temp = Project::empty();
    temp.config("[sources]\nlists = [\"gone.txt\"]\n");

    list().pwd(temp.path()).exits(3).stderr_has("gone.txt");
}

// =============================================================================
// EXPLICIT CONFIG
// =============================================================================

/// > -C selects a config file
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("other.toml", "version = 1\n[sources]\nlists = [\"cities.txt\"]\n");
    temp.file("cities.txt", "NY=>new york\n");

    list()
        .pwd(temp.path())
        .args(&["-C", "other.toml"])
        .passes()
        .stdout_eq("ny => new york\n");
}

/// > FLASHTRIE_CONFIG selects a config file
#[test]
fn explicit_config_env() {
    let temp = Project::empty();
    temp.file("other.toml", "version = 1\n[sources]\nlists = [\"cities.txt\"]\n");
    temp.file("cities.txt", "NY=>new york\n");

    list()
        .pwd(temp.path())
        .env("FLASHTRIE_CONFIG", "other.toml")
        .passes()
        .stdout_eq("ny => new york\n");
}

/// > A missing explicit config is a configuration error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();

    list()
        .pwd(temp.path())
        .args(&["-C", "nowhere.toml"])
        .exits(2)
        .stderr_has("config file not found");
}
