//! Convert command implementation

use super::{Session, Status};
use crate::input::InputArgs;
use crate::output::{Record, RecordBody};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use zenhan_api::{Config, Normalizer, Width};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target width (default: half, or the config file setting)
    #[arg(short, long, value_enum)]
    pub to: Option<TargetWidth>,
}

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetWidth {
    /// Half width (hankaku)
    #[value(alias = "hankaku")]
    Half,
    /// Full width (zenkaku)
    #[value(alias = "zenkaku")]
    Full,
}

impl From<TargetWidth> for Width {
    fn from(target: TargetWidth) -> Self {
        match target {
            TargetWidth::Half => Width::Half,
            TargetWidth::Full => Width::Full,
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute<W: Write>(&self, session: &Session, writer: W) -> Result<Status> {
        let config = Config {
            target_width: self
                .to
                .map(Width::from)
                .unwrap_or(session.config.api.target_width),
            ..session.config.api.clone()
        };
        log::info!("Converting to {} width", config.target_width.as_str());

        let normalizer = Normalizer::with_config(config);
        let mut formatter = session.formatter(writer);

        for source in self.input.read_sources(session.config.cli.input.encoding)? {
            for (line, text) in source.numbered_lines() {
                formatter.write_record(&Record {
                    source: source.name.clone(),
                    line,
                    body: RecordBody::Converted {
                        input: text.to_string(),
                        output: normalizer.normalize(text),
                    },
                })?;
            }
        }

        formatter.finish()?;
        Ok(Status::Success)
    }
}
