//! Configuration module
//!
//! One TOML file configures both the library (`[conversion]`,
//! `[validation]`) and the CLI (`[input]`, `[output]`).

use crate::error::CliError;
use crate::input::Encoding;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use zenhan_api::Config;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct InputConfig {
    /// Encoding of input files
    #[serde(default)]
    pub encoding: Encoding,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Both halves of a loaded configuration file
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// CLI settings
    pub cli: CliConfig,
    /// Library settings
    pub api: Config,
}

impl LoadedConfig {
    /// Parse a configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let cli: CliConfig =
            toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        let api = Config::from_toml_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(Self { cli, api })
    }

    /// Load the file at `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        log::debug!("Loading configuration from {}", path.display());
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zenhan_api::{RuleChain, Width};

    #[test]
    fn test_defaults() {
        let loaded = LoadedConfig::load(None).unwrap();
        assert_eq!(loaded.cli.input.encoding, Encoding::Utf8);
        assert_eq!(loaded.cli.output.default_format, OutputFormat::Text);
        assert!(loaded.cli.output.pretty_json);
        assert_eq!(loaded.api, Config::default());
    }

    #[test]
    fn test_full_config_file() {
        let toml_content = r#"
[input]
encoding = "shift-jis"

[output]
default_format = "json"
pretty_json = false

[conversion]
target_width = "full"

[validation]
preset = "strict"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let loaded = LoadedConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(loaded.cli.input.encoding, Encoding::ShiftJis);
        assert_eq!(loaded.cli.output.default_format, OutputFormat::Json);
        assert!(!loaded.cli.output.pretty_json);
        assert_eq!(loaded.api.target_width, Width::Full);
        assert_eq!(loaded.api.rule_chain, RuleChain::strict());
    }

    #[test]
    fn test_partial_output_section() {
        let loaded = LoadedConfig::from_toml_str("[output]\npretty_json = false").unwrap();
        assert_eq!(loaded.cli.output.default_format, OutputFormat::Text);
        assert!(!loaded.cli.output.pretty_json);
    }

    #[test]
    fn test_invalid_rule_in_config() {
        let err = LoadedConfig::from_toml_str("[validation]\nrules = [\"nope\"]").unwrap_err();
        assert!(err.to_string().contains("unknown validation rule 'nope'"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = LoadedConfig::load(Some(Path::new("/nonexistent/zenhan.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
