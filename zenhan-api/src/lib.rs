//! Public API for zenhan field normalization and validation
//!
//! This crate wraps the algorithms of `zenhan-core` behind a configurable
//! [`Normalizer`] and serializable report types.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use tracing::debug;
use zenhan_core::{charset, sjis, width};

// Re-export key types
pub use config::{Config, ConfigBuilder, Preset};
pub use dto::{CharacterClasses, CheckReport, Input, ValidationReport};
pub use error::{ApiError, Result};
pub use zenhan_core::{Rule, RuleChain, Width};

/// Main entry point for normalization and validation
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: Config,
}

impl Normalizer {
    /// Create a normalizer with the canonical rules and half-width target
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with a specific configuration
    pub fn with_config(config: Config) -> Self {
        debug!(
            rules = config.rule_chain.rules().len(),
            target = config.target_width.as_str(),
            "normalizer configured"
        );
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert to half width; an absent value stays absent
    pub fn to_half_width(&self, input: Option<&str>) -> Option<String> {
        width::to_half_width_opt(input)
    }

    /// Convert to full width; an absent value stays absent
    pub fn to_full_width(&self, input: Option<&str>) -> Option<String> {
        width::to_full_width_opt(input)
    }

    /// Convert towards the configured target width
    pub fn normalize(&self, input: &str) -> String {
        width::convert(input, self.config.target_width)
    }

    /// Keep only the single-byte digits of `input`
    pub fn extract_digits(&self, input: &str) -> String {
        sjis::extract_digits(input)
    }

    /// Run the byte and character checks on `input`
    pub fn check(&self, input: &str) -> CheckReport {
        CheckReport {
            vendor_characters: sjis::has_vendor_characters(input),
            control_codes: sjis::has_control_codes(input),
            markup_characters: charset::has_markup_special_char(input),
            digits: sjis::extract_digits(input),
            classes: CharacterClasses::of(input),
        }
    }

    /// Validate `field` against the configured rule chain
    pub fn validate(&self, field: &str) -> ValidationReport {
        let outcome = self.config.rule_chain.validate(field);
        ValidationReport {
            field: field.to_string(),
            pass: outcome.is_pass(),
            failed_rule: outcome.failed_rule,
        }
    }

    /// Read `input` and validate each non-empty line
    pub fn validate_lines(&self, input: Input) -> Result<Vec<ValidationReport>> {
        let text = input.read_text()?;
        Ok(text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| self.validate(line))
            .collect())
    }
}

// Convenience functions

/// Validate a field with the canonical rules
pub fn validate(field: &str) -> ValidationReport {
    Normalizer::new().validate(field)
}

/// Convert `input` towards `target`
pub fn normalize(input: &str, target: Width) -> String {
    width::convert(input, target)
}
