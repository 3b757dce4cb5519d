//! zenhan command-line entry point

use clap::Parser;
use std::process::ExitCode;
use zenhan_cli::commands::{Commands, GlobalArgs};

/// Japanese field normalization and validation
#[derive(Debug, Parser)]
#[command(name = "zenhan", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute(&cli.global) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
