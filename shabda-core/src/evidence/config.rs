//! Classifier configuration
//!
//! Defaults live both here and in `configs/classifier.toml`; the embedded
//! file is checked against [`ClassifierConfig::default`] in tests.
//! Out-of-domain numbers are accepted as-is and only bend the confidence
//! curve; nothing here validates ranges.

use super::signals::EvidenceSignal;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Raw weighted sum at or above which the blocking outcome is true
    pub const THRESHOLD: f64 = 3.5;
    pub const SLOPE: f64 = 1.5;
    pub const MIDPOINT: f64 = 3.5;
    pub const CAP: f64 = 0.98;
    /// Lowest confidence reported for a true outcome
    pub const FLOOR_LOPA: f64 = 0.55;
    /// Lowest confidence reported for a false outcome
    pub const FLOOR_NON_LOPA: f64 = 0.05;
    /// Confidence of a curated inclusion
    pub const INCLUSION_CONFIDENCE: f64 = 0.95;
    /// Decisions kept by the diagnostics log
    pub const HISTORY_CAPACITY: usize = 32;
}

/// Embedded default configuration file
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../configs/classifier.toml");

/// How a blocking query is decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Curated exclusion/inclusion tables first, scoring as fallback
    #[default]
    #[serde(rename = "lookup")]
    Lookup,
    /// Generalized scoring only
    #[serde(rename = "rules", alias = "rules_only", alias = "rules-only")]
    RulesOnly,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lookup => "lookup",
            Mode::RulesOnly => "rules",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookup" => Ok(Mode::Lookup),
            "rules" | "rules-only" | "rules_only" | "rulesonly" => Ok(Mode::RulesOnly),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Parameters of the bounded logistic squashing curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Squashing {
    pub slope: f64,
    pub midpoint: f64,
    pub cap: f64,
    pub floor_lopa: f64,
    pub floor_non_lopa: f64,
}

impl Default for Squashing {
    fn default() -> Self {
        Self {
            slope: defaults::SLOPE,
            midpoint: defaults::MIDPOINT,
            cap: defaults::CAP,
            floor_lopa: defaults::FLOOR_LOPA,
            floor_non_lopa: defaults::FLOOR_NON_LOPA,
        }
    }
}

/// Full classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub mode: Mode,
    pub threshold: f64,
    pub inclusion_confidence: f64,
    pub history_capacity: usize,
    /// Signal name to weight; names that match no signal are ignored
    pub evidence_weights: BTreeMap<String, f64>,
    pub squashing: Squashing,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            threshold: defaults::THRESHOLD,
            inclusion_confidence: defaults::INCLUSION_CONFIDENCE,
            history_capacity: defaults::HISTORY_CAPACITY,
            evidence_weights: EvidenceSignal::ALL
                .iter()
                .map(|signal| (signal.name().to_string(), signal.default_weight()))
                .collect(),
            squashing: Squashing::default(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a configuration from TOML; missing fields take their defaults
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Configured weight of a signal, zero when absent
    #[inline]
    pub fn weight(&self, signal: EvidenceSignal) -> f64 {
        self.evidence_weights
            .get(signal.name())
            .copied()
            .unwrap_or(0.0)
    }

    /// Largest weighted sum the configured weights can produce
    pub fn max_weighted_sum(&self) -> f64 {
        EvidenceSignal::ALL
            .iter()
            .map(|&signal| self.weight(signal).max(0.0))
            .sum()
    }

    /// Apply a partial update; weights are merged key by key
    pub fn merge(&mut self, partial: &PartialConfig) {
        if let Some(mode) = partial.mode {
            self.mode = mode;
        }
        if let Some(threshold) = partial.threshold {
            self.threshold = threshold;
        }
        if let Some(confidence) = partial.inclusion_confidence {
            self.inclusion_confidence = confidence;
        }
        if let Some(capacity) = partial.history_capacity {
            self.history_capacity = capacity;
        }
        if let Some(weights) = &partial.evidence_weights {
            for (name, &weight) in weights {
                if EvidenceSignal::from_name(name).is_none() {
                    tracing::warn!(signal = %name, "weight for unknown evidence signal is ignored");
                }
                self.evidence_weights.insert(name.clone(), weight);
            }
        }
        if let Some(squashing) = &partial.squashing {
            squashing.apply(&mut self.squashing);
        }
    }

    /// Copy with a partial update applied
    pub fn merged(&self, partial: &PartialConfig) -> Self {
        let mut config = self.clone();
        config.merge(partial);
        config
    }
}

/// Partial update of the squashing parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSquashing {
    pub slope: Option<f64>,
    pub midpoint: Option<f64>,
    pub cap: Option<f64>,
    pub floor_lopa: Option<f64>,
    pub floor_non_lopa: Option<f64>,
}

impl PartialSquashing {
    fn apply(&self, target: &mut Squashing) {
        if let Some(slope) = self.slope {
            target.slope = slope;
        }
        if let Some(midpoint) = self.midpoint {
            target.midpoint = midpoint;
        }
        if let Some(cap) = self.cap {
            target.cap = cap;
        }
        if let Some(floor) = self.floor_lopa {
            target.floor_lopa = floor;
        }
        if let Some(floor) = self.floor_non_lopa {
            target.floor_non_lopa = floor;
        }
    }
}

/// Partial configuration accepted by [`ClassifierConfig::merge`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialConfig {
    pub mode: Option<Mode>,
    pub threshold: Option<f64>,
    pub inclusion_confidence: Option<f64>,
    pub history_capacity: Option<usize>,
    pub evidence_weights: Option<BTreeMap<String, f64>>,
    pub squashing: Option<PartialSquashing>,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a partial configuration from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn weight(mut self, signal: EvidenceSignal, weight: f64) -> Self {
        self.evidence_weights
            .get_or_insert_with(BTreeMap::new)
            .insert(signal.name().to_string(), weight);
        self
    }

    pub fn squashing(mut self, squashing: PartialSquashing) -> Self {
        self.squashing = Some(squashing);
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
