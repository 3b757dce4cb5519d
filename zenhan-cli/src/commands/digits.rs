//! Digits command implementation

use super::{Session, Status};
use crate::input::InputArgs;
use crate::output::{Record, RecordBody};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use zenhan_api::Normalizer;

/// Arguments for the digits command
#[derive(Debug, Args)]
pub struct DigitsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl DigitsArgs {
    /// Execute the digits command
    pub fn execute<W: Write>(&self, session: &Session, writer: W) -> Result<Status> {
        let normalizer = Normalizer::new();
        let mut formatter = session.formatter(writer);

        for source in self.input.read_sources(session.config.cli.input.encoding)? {
            for (line, text) in source.numbered_lines() {
                formatter.write_record(&Record {
                    source: source.name.clone(),
                    line,
                    body: RecordBody::Digits {
                        input: text.to_string(),
                        digits: normalizer.extract_digits(text),
                    },
                })?;
            }
        }

        formatter.finish()?;
        Ok(Status::Success)
    }
}
