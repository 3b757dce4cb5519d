//! Check command implementation

use super::{Session, Status};
use crate::input::InputArgs;
use crate::output::{CheckedLine, Record, RecordBody};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use zenhan_api::Normalizer;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute<W: Write>(&self, session: &Session, writer: W) -> Result<Status> {
        let normalizer = Normalizer::with_config(session.config.api.clone());
        let mut formatter = session.formatter(writer);
        let mut flagged = 0usize;

        for source in self.input.read_sources(session.config.cli.input.encoding)? {
            for (line, text) in source.non_empty_lines() {
                let report = normalizer.check(text);
                if !report.is_clean() {
                    flagged += 1;
                }
                formatter.write_record(&Record {
                    source: source.name.clone(),
                    line,
                    body: RecordBody::Checked(CheckedLine {
                        input: text.to_string(),
                        report,
                    }),
                })?;
            }
        }

        formatter.finish()?;
        log::info!("{} line(s) flagged", flagged);
        Ok(Status::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "①\n\nplain 7\n").unwrap();

        let args = CheckArgs {
            input: InputArgs {
                input: vec![path.display().to_string()],
                encoding: None,
            },
        };

        let mut buffer = Vec::new();
        args.execute(&Session::default(), &mut buffer).unwrap();
        let out = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(
            ":1: vendor=yes control=no markup=no digits= classes=full-width"
        ));
        assert!(lines[1].ends_with(
            ":3: vendor=no control=no markup=no digits=7 classes=ascii,password-forbidden"
        ));
    }
}
