//! High-level configuration API

use crate::error::{ApiError, Result};
use zenhan_core::{RuleChain, Width};

/// Configuration for a [`crate::Normalizer`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Rules run by `validate`, in order
    pub rule_chain: RuleChain,
    /// Direction used by `normalize`
    pub target_width: Width,
}

impl Config {
    /// Canonical rules, half-width normalization
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Canonical rules plus the extra rules
    pub fn strict() -> Self {
        Self {
            rule_chain: RuleChain::strict(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML configuration document
    ///
    /// ```toml
    /// [conversion]
    /// target_width = "full"
    ///
    /// [validation]
    /// preset = "strict"
    /// rules = ["delimiter-present", "single-at-sign"]
    /// ```
    ///
    /// `rules`, when present, replaces the preset chain.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.into_config()
    }

    /// Read and parse a TOML configuration file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&source)
    }
}

/// Rule chain preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Preset {
    /// The canonical chain
    #[default]
    Canonical,
    /// The canonical chain plus the extra rules
    Strict,
}

impl Preset {
    fn chain(self) -> RuleChain {
        match self {
            Preset::Canonical => RuleChain::canonical(),
            Preset::Strict => RuleChain::strict(),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from a preset chain
    pub fn preset(mut self, preset: Preset) -> Self {
        self.config.rule_chain = preset.chain();
        self
    }

    /// Use the strict chain
    pub fn strict(self) -> Self {
        self.preset(Preset::Strict)
    }

    /// Set the rule chain
    pub fn rule_chain(mut self, chain: RuleChain) -> Self {
        self.config.rule_chain = chain;
        self
    }

    /// Set the rule chain from rule names
    pub fn rules<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.rule_chain = RuleChain::from_names(names)?;
        Ok(self)
    }

    /// Set the normalization direction
    pub fn target_width(mut self, width: Width) -> Self {
        self.config.target_width = width;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.rule_chain.is_empty() {
            return Err(ApiError::Config(
                "validation needs at least one rule".to_string(),
            ));
        }

        Ok(self.config)
    }
}

/// Sections outside `conversion` and `validation` are left to other readers
/// of the same file.
#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Deserialize)]
struct ConfigFile {
    #[serde(default)]
    conversion: ConversionSection,

    #[serde(default)]
    validation: ValidationSection,
}

#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConversionSection {
    #[serde(default)]
    target_width: Width,
}

#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidationSection {
    #[serde(default)]
    preset: Preset,

    rules: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
impl ConfigFile {
    fn into_config(self) -> Result<Config> {
        let mut builder = Config::builder()
            .preset(self.validation.preset)
            .target_width(self.conversion.target_width);

        if let Some(names) = self.validation.rules {
            builder = builder.rules(names)?;
        }

        builder.build()
    }
}
