//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod stdin;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

/// Text encoding of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
pub enum Encoding {
    /// UTF-8
    #[default]
    #[value(name = "utf-8", alias = "utf8")]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// Shift_JIS (WHATWG variant, includes NEC and IBM extensions)
    #[value(name = "shift-jis", alias = "sjis")]
    #[serde(rename = "shift-jis", alias = "sjis")]
    ShiftJis,
}

/// A named piece of input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path, or `-` for stdin
    pub name: String,
    /// Decoded content
    pub text: String,
}

impl Source {
    /// Lines with their 1-based line numbers
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }

    /// Non-empty lines with their 1-based line numbers
    pub fn non_empty_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.numbered_lines().filter(|(_, line)| !line.is_empty())
    }
}

/// Input arguments shared by the line-oriented commands
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Input encoding (default: utf-8, or the config file setting)
    #[arg(short, long, value_enum)]
    pub encoding: Option<Encoding>,
}

impl InputArgs {
    /// Read every input source, falling back to stdin
    pub fn read_sources(&self, default_encoding: Encoding) -> Result<Vec<Source>> {
        let encoding = self.encoding.unwrap_or(default_encoding);

        if self.input.is_empty() || self.input == ["-"] {
            log::debug!("Reading stdin as {:?}", encoding);
            let text = stdin::read_stdin(encoding)?;
            return Ok(vec![Source {
                name: "-".to_string(),
                text,
            }]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Reading {} file(s) as {:?}", files.len(), encoding);

        files
            .iter()
            .map(|path| -> Result<Source> {
                Ok(Source {
                    name: path.display().to_string(),
                    text: FileReader::read_text(path, encoding)?,
                })
            })
            .collect()
    }
}
