// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::completions::ShellKind;

/// Extract keywords from text in a single pass, with optional fuzzy matching
#[derive(Parser)]
#[command(name = "flashtrie")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "FLASHTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find keywords in text
    Extract(ExtractArgs),
    /// Print the registered keywords and their values
    List(ListArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

/// Where keywords come from, in addition to `[sources]` in flashtrie.toml.
#[derive(clap::Args, Default)]
pub struct SourceArgs {
    /// Pattern-list file (`pattern` or `pattern=>value` per line)
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub pattern_files: Vec<PathBuf>,

    /// Keyword table (TOML or JSON) mapping each value to its patterns
    #[arg(short = 't', long = "table", value_name = "FILE")]
    pub tables: Vec<PathBuf>,

    /// Inline keyword (`pattern` or `pattern=>value`)
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Ignore sources listed in the config file
    #[arg(long)]
    pub no_config_sources: bool,
}

#[derive(clap::Args, Default)]
pub struct ExtractArgs {
    /// Text to search (reads lines from --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Read input lines from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "texts")]
    pub input: Option<PathBuf>,

    /// Edits tolerated per match (overrides [extract] max_cost)
    #[arg(long, value_name = "N")]
    pub max_cost: Option<usize>,

    /// Show where each keyword was found
    #[arg(long)]
    pub spans: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: ShellKind,

    /// Write the script into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
