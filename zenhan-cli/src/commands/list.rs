//! List command implementation

use super::Status;
use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use zenhan_api::Rule;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List validation rules
    Rules,

    /// List available output formats
    Formats,

    /// List supported input encodings
    Encodings,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute<W: Write>(&self, mut writer: W) -> Result<Status> {
        match self {
            ListCommands::Rules => {
                writeln!(writer, "Canonical rules (evaluated in this order):")?;
                for rule in Rule::CANONICAL {
                    writeln!(writer, "  {:<26}{}", rule.name(), rule.description())?;
                }
                writeln!(writer)?;
                writeln!(writer, "Extra rules (--strict or --rules):")?;
                for rule in Rule::EXTRA {
                    writeln!(writer, "  {:<26}{}", rule.name(), rule.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                writeln!(writer, "  text  - One result per line")?;
                writeln!(writer, "  json  - JSON array of records")?;
            }
            ListCommands::Encodings => {
                writeln!(writer, "Supported input encodings:")?;
                writeln!(writer, "  utf-8      - UTF-8 (default)")?;
                writeln!(writer, "  shift-jis  - Shift_JIS with NEC and IBM extensions")?;
            }
        }

        writer.flush()?;
        Ok(Status::Success)
    }
}
