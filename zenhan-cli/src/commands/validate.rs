//! Validate command implementation

use super::{Session, Status};
use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::{Record, RecordBody};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use zenhan_api::{Config, Normalizer, RuleChain, Width};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Comma-separated rule names, evaluated in the given order
    #[arg(short, long, value_name = "RULES", value_delimiter = ',', conflicts_with = "strict")]
    pub rules: Vec<String>,

    /// Run the canonical rules followed by no-space and no-consecutive-dots
    #[arg(short, long)]
    pub strict: bool,

    /// Convert each field to half width before validating
    #[arg(short, long)]
    pub normalize: bool,
}

impl ValidateArgs {
    fn rule_chain(&self, session: &Session) -> Result<RuleChain> {
        if self.strict {
            return Ok(RuleChain::strict());
        }
        if self.rules.is_empty() {
            return Ok(session.config.api.rule_chain.clone());
        }

        let chain = RuleChain::from_names(&self.rules)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(chain)
    }

    /// Execute the validate command
    pub fn execute<W: Write>(&self, session: &Session, writer: W) -> Result<Status> {
        let rule_chain = self.rule_chain(session)?;
        let rule_names: Vec<_> = rule_chain.rules().iter().map(|rule| rule.name()).collect();
        log::debug!("Rule chain: {}", rule_names.join(", "));

        let normalizer = Normalizer::with_config(Config {
            rule_chain,
            target_width: Width::Half,
        });
        let mut formatter = session.formatter(writer);
        let mut failures = 0usize;

        for source in self.input.read_sources(session.config.cli.input.encoding)? {
            for (line, text) in source.non_empty_lines() {
                let field = if self.normalize {
                    normalizer.normalize(text)
                } else {
                    text.to_string()
                };

                let report = normalizer.validate(&field);
                if !report.pass {
                    failures += 1;
                }
                formatter.write_record(&Record {
                    source: source.name.clone(),
                    line,
                    body: RecordBody::Validated(report),
                })?;
            }
        }

        formatter.finish()?;

        if failures > 0 {
            log::info!("{} field(s) failed validation", failures);
            Ok(Status::Failure)
        } else {
            Ok(Status::Success)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(path: &std::path::Path) -> ValidateArgs {
        ValidateArgs {
            input: InputArgs {
                input: vec![path.display().to_string()],
                encoding: None,
            },
            rules: Vec::new(),
            strict: false,
            normalize: false,
        }
    }

    #[test]
    fn test_all_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.txt");
        fs::write(&path, "user@example.com\nuser@[192.168.1.1]\n").unwrap();

        let mut buffer = Vec::new();
        let status = args_for(&path)
            .execute(&Session::default(), &mut buffer)
            .unwrap();

        assert_eq!(status, Status::Success);
        assert_eq!(String::from_utf8(buffer).unwrap().matches(": OK ").count(), 2);
    }

    #[test]
    fn test_failure_sets_status() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.txt");
        fs::write(&path, "user@example.com\nuser@@example.com\n").unwrap();

        let mut buffer = Vec::new();
        let status = args_for(&path)
            .execute(&Session::default(), &mut buffer)
            .unwrap();

        assert_eq!(status, Status::Failure);
        assert!(String::from_utf8(buffer)
            .unwrap()
            .contains(":2: NG user@@example.com [single-at-sign]"));
    }

    #[test]
    fn test_normalize_before_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.txt");
        fs::write(&path, "ｕｓｅｒ＠ｅｘａｍｐｌｅ．ｃｏｍ\n").unwrap();

        let mut args = args_for(&path);
        let mut buffer = Vec::new();
        let status = args.execute(&Session::default(), &mut buffer).unwrap();
        assert_eq!(status, Status::Failure);

        args.normalize = true;
        let mut buffer = Vec::new();
        let status = args.execute(&Session::default(), &mut buffer).unwrap();
        assert_eq!(status, Status::Success);
        assert!(String::from_utf8(buffer)
            .unwrap()
            .contains("OK user@example.com"));
    }

    #[test]
    fn test_custom_rules() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.txt");
        fs::write(&path, "no at sign\n").unwrap();

        let mut args = args_for(&path);
        args.rules = vec!["single-at-sign".to_string()];
        let status = args.execute(&Session::default(), Vec::new()).unwrap();
        assert_eq!(status, Status::Success);

        args.rules = vec!["no-space".to_string()];
        let status = args.execute(&Session::default(), Vec::new()).unwrap();
        assert_eq!(status, Status::Failure);

        args.rules = vec!["no-such-rule".to_string()];
        let err = args.execute(&Session::default(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("unknown validation rule 'no-such-rule'"));
    }
}
