//! Blocking decision value

use super::signals::EvidenceSignal;
use serde::{Deserialize, Serialize};

/// Which stage produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPath {
    /// Root or affix had no letters
    InvalidInput,
    /// Curated exclusion table
    Exclusion,
    /// Curated inclusion table
    Inclusion,
    /// Weighted evidence scoring
    Scored,
}

impl DecisionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionPath::InvalidInput => "invalid_input",
            DecisionPath::Exclusion => "exclusion",
            DecisionPath::Inclusion => "inclusion",
            DecisionPath::Scored => "scored",
        }
    }
}

/// A weighted signal that contributed to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: EvidenceSignal,
    pub weight: f64,
}

/// Outcome of a blocking classification
///
/// Built once per call and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the blocking condition holds
    pub outcome: bool,
    /// Bounded confidence in `[0, 1]`
    pub confidence: f64,
    /// Active signals with their configured weights, in scoring order
    pub contributing_signals: Vec<SignalContribution>,
    pub rationale: String,
    pub path: DecisionPath,
    /// Raw weighted sum before squashing; zero for table hits
    pub weighted_sum: f64,
}

impl Decision {
    /// Whether a given signal contributed
    pub fn has_signal(&self, signal: EvidenceSignal) -> bool {
        self.contributing_signals.iter().any(|c| c.signal == signal)
    }
}

/// Clamp into `[0, 1]`, mapping NaN to zero
#[inline]
pub(crate) fn unit_interval(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval() {
        assert_eq!(unit_interval(f64::NAN), 0.0);
        assert_eq!(unit_interval(-3.0), 0.0);
        assert_eq!(unit_interval(1.7), 1.0);
        assert_eq!(unit_interval(f64::INFINITY), 1.0);
        assert_eq!(unit_interval(0.25), 0.25);
    }

    #[test]
    fn test_decision_serializes_path_and_signals() {
        let decision = Decision {
            outcome: true,
            confidence: 0.9,
            contributing_signals: vec![SignalContribution {
                signal: EvidenceSignal::RootFinalNasal,
                weight: 2.0,
            }],
            rationale: "test".to_string(),
            path: DecisionPath::Scored,
            weighted_sum: 2.0,
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"path\":\"scored\""));
        assert!(json.contains("\"signal\":\"root_final_nasal\""));
        assert!(decision.has_signal(EvidenceSignal::RootFinalNasal));
        assert!(!decision.has_signal(EvidenceSignal::AffixKitClass));
    }
}
