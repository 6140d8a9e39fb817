//! High-level configuration API

use crate::error::{ApiError, Result};
use shabda_core::evidence::{EvidenceSignal, PartialConfig, PartialSquashing};
use shabda_core::{ClassifierConfig, Mode};
use std::path::Path;

/// Classifier configuration an [`Analyzer`](crate::Analyzer) starts from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub(crate) classifier: ClassifierConfig,
}

impl Config {
    /// Load a TOML configuration file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            classifier: ClassifierConfig::from_file(path)?,
        })
    }

    /// Curated tables disabled: every query is scored
    pub fn rules_only() -> Self {
        Self {
            classifier: ClassifierConfig {
                mode: Mode::RulesOnly,
                ..ClassifierConfig::default()
            },
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The underlying classifier configuration
    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(self.classifier.to_toml_string()?)
    }
}

impl From<ClassifierConfig> for Config {
    fn from(classifier: ClassifierConfig) -> Self {
        Self { classifier }
    }
}

/// Configuration builder
///
/// Settings are collected as a partial update and applied on top of the
/// base configuration (defaults, or a file) when built.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base: Option<ClassifierConfig>,
    partial: PartialConfig,
    squashing: PartialSquashing,
}

impl ConfigBuilder {
    /// Start from a configuration file instead of the defaults
    pub fn file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.base = Some(ClassifierConfig::from_file(path)?);
        Ok(self)
    }

    /// Set the classifier mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.partial.mode = Some(mode);
        self
    }

    /// Set the classifier mode by name ("lookup", "rules")
    pub fn mode_name(self, name: &str) -> Result<Self> {
        Ok(self.mode(name.parse()?))
    }

    /// Set the blocking threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.partial.threshold = Some(threshold);
        self
    }

    /// Set the weight of a signal by name
    pub fn weight(mut self, signal: &str, weight: f64) -> Result<Self> {
        let signal = EvidenceSignal::from_name(signal)
            .ok_or_else(|| ApiError::InvalidArgument(format!("unknown evidence signal: {signal}")))?;
        self.partial = self.partial.weight(signal, weight);
        Ok(self)
    }

    /// Set the confidence of curated inclusions
    pub fn inclusion_confidence(mut self, confidence: f64) -> Self {
        self.partial.inclusion_confidence = Some(confidence);
        self
    }

    /// Set the number of decisions kept by the diagnostics log
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.partial.history_capacity = Some(capacity);
        self
    }

    /// Set the squashing curve slope
    pub fn slope(mut self, slope: f64) -> Self {
        self.squashing.slope = Some(slope);
        self
    }

    /// Set the squashing curve midpoint
    pub fn midpoint(mut self, midpoint: f64) -> Self {
        self.squashing.midpoint = Some(midpoint);
        self
    }

    /// Set the squashing curve cap
    pub fn cap(mut self, cap: f64) -> Self {
        self.squashing.cap = Some(cap);
        self
    }

    /// Set the confidence floors for true and false outcomes
    pub fn floors(mut self, lopa: f64, non_lopa: f64) -> Self {
        self.squashing.floor_lopa = Some(lopa);
        self.squashing.floor_non_lopa = Some(non_lopa);
        self
    }

    /// The collected settings as a partial update
    pub fn partial(&self) -> PartialConfig {
        let mut partial = self.partial.clone();
        if self.squashing != PartialSquashing::default() {
            partial.squashing = Some(self.squashing.clone());
        }
        partial
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let partial = self.partial();
        let mut classifier = self.base.unwrap_or_default();
        classifier.merge(&partial);
        Ok(Config { classifier })
    }
}
