//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use zenhan_api::{CheckReport, ValidationReport};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one result per line
    #[default]
    Text,
    /// JSON array of records
    Json,
}

/// Create a formatter writing to `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

/// Result for one input line
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Input name, `-` for stdin
    pub source: String,
    /// 1-based line number
    pub line: usize,
    /// Command-specific result
    #[serde(flatten)]
    pub body: RecordBody,
}

/// Command-specific part of a [`Record`]
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecordBody {
    /// Width conversion
    Converted {
        /// Input line
        input: String,
        /// Converted line
        output: String,
    },
    /// Digit extraction
    Digits {
        /// Input line
        input: String,
        /// Extracted digits
        digits: String,
    },
    /// Byte and character checks
    Checked(CheckedLine),
    /// Field validation
    Validated(ValidationReport),
}

/// A line together with its check report
#[derive(Debug, Clone, Serialize)]
pub struct CheckedLine {
    /// Input line
    pub input: String,
    /// Check results
    #[serde(flatten)]
    pub report: CheckReport,
}
