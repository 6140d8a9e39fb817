//! Weighted evidence scoring
//!
//! The outcome compares the raw weighted sum with the threshold. The
//! squashed value is only the displayed confidence, so a threshold above
//! the largest attainable sum forces a false outcome whatever the curve
//! parameters are.

use super::config::{ClassifierConfig, Squashing};
use super::decision::{unit_interval, Decision, DecisionPath, SignalContribution};
use super::features::{AffixFeatures, RootFeatures};
use super::signals::active_signals;

/// Bounded logistic curve: non-decreasing in `sum` for a non-negative slope
#[inline]
pub fn squash(sum: f64, squashing: &Squashing) -> f64 {
    squashing.cap / (1.0 + (-squashing.slope * (sum - squashing.midpoint)).exp())
}

/// Confidence for a raw sum and the outcome it produced
pub fn confidence(sum: f64, outcome: bool, squashing: &Squashing) -> f64 {
    let floor = if outcome {
        squashing.floor_lopa
    } else {
        squashing.floor_non_lopa
    };
    let squashed = squash(sum, squashing);
    let lifted = if squashed.is_nan() {
        floor
    } else {
        squashed.max(floor)
    };
    unit_interval(lifted)
}

/// Score a root/affix pair with the configured weights
pub fn score(root: &RootFeatures, affix: &AffixFeatures, config: &ClassifierConfig) -> Decision {
    let contributing_signals: Vec<SignalContribution> = active_signals(root, affix)
        .into_iter()
        .map(|signal| SignalContribution {
            signal,
            weight: config.weight(signal),
        })
        .collect();

    let weighted_sum: f64 = contributing_signals.iter().map(|c| c.weight).sum();
    let outcome = weighted_sum >= config.threshold;
    let confidence = confidence(weighted_sum, outcome, &config.squashing);

    let active = if contributing_signals.is_empty() {
        "none".to_string()
    } else {
        contributing_signals
            .iter()
            .map(|c| c.signal.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let rationale = format!(
        "weighted sum {weighted_sum:.3} {} threshold {:.3}; active: {active}",
        if outcome { ">=" } else { "<" },
        config.threshold
    );

    Decision {
        outcome,
        confidence,
        contributing_signals,
        rationale,
        path: DecisionPath::Scored,
        weighted_sum,
    }
}

/// Degenerate decision for a root or affix without letters
pub fn invalid_input(config: &ClassifierConfig) -> Decision {
    Decision {
        outcome: false,
        confidence: confidence(0.0, false, &config.squashing),
        contributing_signals: Vec::new(),
        rationale: "empty root or affix".to_string(),
        path: DecisionPath::InvalidInput,
        weighted_sum: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_is_bounded_by_cap() {
        let squashing = Squashing::default();
        assert!(squash(1e9, &squashing) <= squashing.cap);
        assert!(squash(-1e9, &squashing) >= 0.0);
        assert!((squash(squashing.midpoint, &squashing) - squashing.cap / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_squash_is_monotonic() {
        let squashing = Squashing::default();
        let mut previous = f64::MIN;
        for step in 0..100 {
            let value = squash(step as f64 * 0.1, &squashing);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_floors() {
        let squashing = Squashing::default();
        assert_eq!(confidence(0.0, false, &squashing), squashing.floor_non_lopa);
        assert_eq!(confidence(0.0, true, &squashing), squashing.floor_lopa);
    }

    #[test]
    fn test_out_of_domain_parameters_stay_bounded() {
        let squashing = Squashing {
            slope: f64::NAN,
            midpoint: 0.0,
            cap: 7.0,
            floor_lopa: -2.0,
            floor_non_lopa: 3.0,
        };
        for outcome in [true, false] {
            let value = confidence(1.0, outcome, &squashing);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_score_reports_signals_in_order() {
        let decision = score(
            &RootFeatures::from_form("gam"),
            &AffixFeatures::from_label("ya"),
            &ClassifierConfig::default(),
        );
        assert!(decision.outcome);
        assert_eq!(decision.path, DecisionPath::Scored);
        assert_eq!(decision.contributing_signals.len(), 6);
        assert!((decision.weighted_sum - 5.25).abs() < 1e-12);
        assert!(decision.rationale.starts_with("weighted sum 5.250 >= threshold 3.500"));
    }

    #[test]
    fn test_invalid_input_is_lowest() {
        let config = ClassifierConfig::default();
        let decision = invalid_input(&config);
        assert!(!decision.outcome);
        assert_eq!(decision.confidence, config.squashing.floor_non_lopa);
    }
}
