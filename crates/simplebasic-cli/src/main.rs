// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Simple language command-line interface.
//!
//! This is the main entry point for the `simplebasic` command.

use clap::{Parser, Subcommand};
use miette::Result;

mod commands;

/// Simple: a line-numbered BASIC-style teaching language
#[derive(Debug, Parser)]
#[command(name = "simplebasic")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a source file for errors without executing it
    Check {
        /// Source file to check
        file: String,

        /// Print the token stream
        #[arg(long)]
        tokens: bool,

        /// Print the canonical program listing
        #[arg(long)]
        ast: bool,
    },

    /// Run a program with inputs supplied up front
    Run {
        /// Source file to run
        file: String,

        /// An input value; repeat the flag for each `INPUT` statement
        #[arg(long = "input", value_name = "INT")]
        inputs: Vec<i64>,

        /// Abort after this many executed statements
        #[arg(long, value_name = "N")]
        max_steps: Option<u64>,
    },

    /// Run a program interactively, speaking the session protocol as
    /// JSON lines on stdin/stdout
    Interactive {
        /// Source file to run
        file: String,
    },

    /// List the bundled example programs, or print one by name
    Examples {
        /// Name of the example to print
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { file, tokens, ast } => commands::check::check(&file, tokens, ast),
        Command::Run {
            file,
            inputs,
            max_steps,
        } => commands::run::run(&file, inputs, max_steps),
        Command::Interactive { file } => commands::interactive::run(&file),
        Command::Examples { name } => commands::examples::run(name.as_deref()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Initialize logging; diagnostics go to stderr so program output on
/// stdout stays clean.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}
