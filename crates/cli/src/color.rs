// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI env var set → no color
//!    - Else → auto

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env;

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if env::no_color() {
        return ColorChoice::Never;
    }
    if env::force_color() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || env::is_ci() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Combine command-line flags with environment detection.
pub fn color_choice(force: bool, disable: bool) -> ColorChoice {
    match (force, disable) {
        (_, true) => ColorChoice::Never,
        (true, false) => ColorChoice::Always,
        (false, false) => resolve_color(),
    }
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Green bold keyword value.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Bold pattern or matched text.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Yellow input number.
    pub fn input() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Cyan character span.
    pub fn span() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
