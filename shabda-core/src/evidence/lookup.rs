//! Curated root/affix tables
//!
//! Consulted only in [`Mode::Lookup`](super::Mode::Lookup). Keys are
//! Latin spellings, so native-script queries hit the same entries.

use super::config::ClassifierConfig;
use super::decision::{unit_interval, Decision, DecisionPath};

/// Pairs known to truncate the root-final nasal
const INCLUSIONS: &[(&str, &str)] = &[
    ("gam", "kta"),
    ("gam", "ktvā"),
    ("gam", "ktin"),
    ("han", "kta"),
    ("han", "ktvā"),
    ("man", "kta"),
    ("man", "ktin"),
    ("tan", "kta"),
    ("yam", "kta"),
    ("ram", "kta"),
    ("nam", "kta"),
    ("van", "kta"),
];

/// Pairs known to keep the root intact (lengthening or ā-substitution instead)
const EXCLUSIONS: &[(&str, &str)] = &[
    ("śam", "kta"),
    ("dam", "kta"),
    ("kram", "kta"),
    ("kram", "ktvā"),
    ("kṣam", "kta"),
    ("jan", "kta"),
    ("khan", "kta"),
    ("san", "kta"),
];

fn contains(table: &[(&str, &str)], root: &str, affix: &str) -> bool {
    table.iter().any(|&(r, a)| r == root && a == affix)
}

pub fn is_excluded(root: &str, affix: &str) -> bool {
    contains(EXCLUSIONS, root, affix)
}

pub fn is_included(root: &str, affix: &str) -> bool {
    contains(INCLUSIONS, root, affix)
}

/// Decision from the curated tables, exclusions first
pub fn lookup(root: &str, affix: &str, config: &ClassifierConfig) -> Option<Decision> {
    if is_excluded(root, affix) {
        return Some(Decision {
            outcome: false,
            confidence: unit_interval(config.squashing.floor_non_lopa),
            contributing_signals: Vec::new(),
            rationale: "explicit exclusion".to_string(),
            path: DecisionPath::Exclusion,
            weighted_sum: 0.0,
        });
    }

    if is_included(root, affix) {
        return Some(Decision {
            outcome: true,
            confidence: unit_interval(config.inclusion_confidence),
            contributing_signals: Vec::new(),
            rationale: "curated mapping".to_string(),
            path: DecisionPath::Inclusion,
            weighted_sum: 0.0,
        });
    }

    None
}
