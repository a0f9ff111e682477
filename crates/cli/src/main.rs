// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flashtrie CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use flashtrie::cli::{Cli, Command, CompletionsArgs};
use flashtrie::completions;
use flashtrie::env::names;
use flashtrie::error::ExitCode;

mod cmd_extract;
mod cmd_list;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::FLASHTRIE_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("flashtrie: {}", e);
            match e.downcast_ref::<flashtrie::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Extract(args)) => cmd_extract::run(&cli, args),
        Some(Command::List(args)) => cmd_list::run(&cli, args),
        Some(Command::Completions(args)) => {
            write_completions(args)?;
            Ok(ExitCode::Success)
        }
    }
}

fn write_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    match &args.dir {
        Some(dir) => {
            let path = completions::install_script(args.shell, dir)?;
            eprintln!("wrote {}", path.display());
        }
        None => completions::write_script(args.shell, &mut std::io::stdout().lock()),
    }
    Ok(())
}
