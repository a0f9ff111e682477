// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts for flashtrie.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::Cli;
use crate::error::{Error, Result};

const BIN_NAME: &str = "flashtrie";

/// Supported shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    /// Get the clap_complete shell type.
    fn clap_shell(&self) -> clap_complete::Shell {
        match self {
            ShellKind::Bash => clap_complete::Shell::Bash,
            ShellKind::Zsh => clap_complete::Shell::Zsh,
            ShellKind::Fish => clap_complete::Shell::Fish,
        }
    }

    /// Conventional file name for the completion script.
    pub fn script_filename(&self) -> &'static str {
        match self {
            ShellKind::Bash => "flashtrie.bash",
            ShellKind::Zsh => "_flashtrie",
            ShellKind::Fish => "flashtrie.fish",
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_script(shell: ShellKind, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell.clap_shell(), &mut cmd, BIN_NAME, out);
}

/// Write the completion script into `dir`, creating it if needed.
///
/// Returns the path of the written script.
pub fn install_script(shell: ShellKind, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(shell.script_filename());
    let mut file = fs::File::create(&path).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    write_script(shell, &mut file);

    tracing::debug!("wrote {:?} completions to {}", shell, path.display());
    Ok(path)
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
