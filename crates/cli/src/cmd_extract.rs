// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extract command implementation.

use flashtrie::batch;
use flashtrie::cli::{Cli, ExtractArgs, OutputFormat};
use flashtrie::color::color_choice;
use flashtrie::error::{Error, ExitCode};
use flashtrie::output::FormatOptions;
use flashtrie::output::json::JsonFormatter;
use flashtrie::output::text::TextFormatter;
use flashtrie::session;

/// Run the extract command.
pub fn run(cli: &Cli, args: &ExtractArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = session::load_config(cli.config.as_deref(), &cwd)?;
    let matcher = session::build_matcher(&config, &args.sources)?;
    if matcher.is_empty() {
        return Err(Error::Argument(
            "no keywords to search for\n  Pass -k, -p or -t, or list sources in flashtrie.toml."
                .to_string(),
        )
        .into());
    }

    let max_cost = args.max_cost.unwrap_or(config.extract.max_cost);
    let inputs = batch::read_inputs(&args.texts, args.input.as_deref())?;
    let reports = batch::extract_all(&matcher, &inputs, max_cost);

    match args.output {
        OutputFormat::Text => {
            let options = FormatOptions { spans: args.spans };
            let mut formatter =
                TextFormatter::stdout(color_choice(args.color, args.no_color), options);
            for report in &reports {
                formatter.write_report(report)?;
            }
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_extraction(&reports)?;
        }
    }

    if reports.iter().any(|r| !r.matches.is_empty()) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatches)
    }
}
