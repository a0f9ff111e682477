// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.

use flashtrie::cli::{Cli, ListArgs, OutputFormat};
use flashtrie::color::color_choice;
use flashtrie::error::ExitCode;
use flashtrie::output::FormatOptions;
use flashtrie::output::json::JsonFormatter;
use flashtrie::output::text::TextFormatter;
use flashtrie::session;

/// Run the list command.
pub fn run(cli: &Cli, args: &ListArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = session::load_config(cli.config.as_deref(), &cwd)?;
    let matcher = session::build_matcher(&config, &args.sources)?;
    let keywords = matcher.keywords();

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(
                color_choice(args.color, args.no_color),
                FormatOptions::default(),
            );
            formatter.write_keywords(&keywords)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_keywords(&keywords)?;
        }
    }

    Ok(ExitCode::Success)
}
