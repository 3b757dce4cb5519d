//! CLI command implementations

use crate::config::LoadedConfig;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod check;
pub mod convert;
pub mod digits;
pub mod list;
pub mod validate;

/// Options accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Output format (default: text, or the config file setting)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "ZENHAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load configuration and resolve output settings
    pub fn session(&self) -> Result<Session> {
        let config = LoadedConfig::load(self.config.as_deref())?;
        let format = self.format.unwrap_or(config.cli.output.default_format);
        Ok(Session { config, format })
    }
}

/// Settings resolved from flags and the configuration file
#[derive(Debug, Default)]
pub struct Session {
    /// Loaded configuration
    pub config: LoadedConfig,
    /// Effective output format
    pub format: OutputFormat,
}

impl Session {
    /// Create the formatter for this session
    pub fn formatter<'a, W: Write + 'a>(&self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        create_formatter(self.format, self.config.cli.output.pretty_json, writer)
    }
}

/// Overall result of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Everything passed
    Success,
    /// At least one input failed validation
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::from(1),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text between full width and half width
    Convert(convert::ConvertArgs),

    /// Report vendor characters, control codes, markup and character classes
    Check(check::CheckArgs),

    /// Extract single-byte digits from each line
    Digits(digits::DigitsArgs),

    /// Validate each line as a local@domain field
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the command, writing results to stdout
    pub fn execute(&self, global: &GlobalArgs) -> Result<Status> {
        global.init_logging();
        log::debug!("Command: {:?}", self);

        let session = global.session()?;
        let stdout = io::stdout();
        let writer = stdout.lock();

        match self {
            Commands::Convert(args) => args.execute(&session, writer),
            Commands::Check(args) => args.execute(&session, writer),
            Commands::Digits(args) => args.execute(&session, writer),
            Commands::Validate(args) => args.execute(&session, writer),
            Commands::List { subcommand } => subcommand.execute(writer),
        }
    }
}
