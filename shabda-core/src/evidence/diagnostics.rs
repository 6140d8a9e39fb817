//! Decision log and counters kept by a [`Classifier`](super::Classifier)
//!
//! Recording never feeds back into classification. Recent decisions and
//! counters are read and reset independently.

use super::config::Mode;
use super::decision::{Decision, DecisionPath};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Options for reading the log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Clear what was read
    #[serde(default)]
    pub reset: bool,
    /// Only the most recent `n` decisions
    #[serde(default)]
    pub last: Option<usize>,
}

impl ReadOptions {
    pub fn reset() -> Self {
        Self {
            reset: true,
            last: None,
        }
    }

    pub fn last(n: usize) -> Self {
        Self {
            reset: false,
            last: Some(n),
        }
    }
}

/// A logged classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedDecision {
    /// Sequence number of the call, starting at 1
    pub call: u64,
    pub root: String,
    pub affix: String,
    pub mode: Mode,
    pub decision: Decision,
}

/// Recent decisions, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsSnapshot {
    pub capacity: usize,
    pub decisions: Vec<LoggedDecision>,
}

/// Per-path call counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCounts {
    pub invalid_input: u64,
    pub exclusion: u64,
    pub inclusion: u64,
    pub scored: u64,
}

impl PathCounts {
    fn bump(&mut self, path: DecisionPath) {
        match path {
            DecisionPath::InvalidInput => self.invalid_input += 1,
            DecisionPath::Exclusion => self.exclusion += 1,
            DecisionPath::Inclusion => self.inclusion += 1,
            DecisionPath::Scored => self.scored += 1,
        }
    }
}

/// Aggregate counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub calls: u64,
    pub outcomes_true: u64,
    pub outcomes_false: u64,
    pub by_path: PathCounts,
    /// Mean confidence over counted calls, zero when none
    pub mean_confidence: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    calls: u64,
    outcomes_true: u64,
    by_path: PathCounts,
    confidence_total: f64,
}

/// Bounded decision history plus counters
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    capacity: usize,
    sequence: u64,
    recent: VecDeque<LoggedDecision>,
    counters: Counters,
}

impl DiagnosticsLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sequence: 0,
            recent: VecDeque::with_capacity(capacity.min(1024)),
            counters: Counters::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the history bound, dropping the oldest entries if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.recent.len() > capacity {
            self.recent.pop_front();
        }
    }

    /// Record one call
    pub fn record(&mut self, root: &str, affix: &str, mode: Mode, decision: &Decision) {
        self.sequence += 1;
        self.counters.calls += 1;
        if decision.outcome {
            self.counters.outcomes_true += 1;
        }
        self.counters.by_path.bump(decision.path);
        self.counters.confidence_total += decision.confidence;

        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(LoggedDecision {
            call: self.sequence,
            root: root.to_string(),
            affix: affix.to_string(),
            mode,
            decision: decision.clone(),
        });
    }

    /// Read recent decisions; `reset` clears the history only
    pub fn diagnostics(&mut self, options: ReadOptions) -> DiagnosticsSnapshot {
        let skip = options
            .last
            .map_or(0, |n| self.recent.len().saturating_sub(n));
        let decisions = self.recent.iter().skip(skip).cloned().collect();
        if options.reset {
            self.recent.clear();
        }
        DiagnosticsSnapshot {
            capacity: self.capacity,
            decisions,
        }
    }

    /// Read counters; `reset` clears the counters only
    pub fn metrics(&mut self, options: ReadOptions) -> MetricsSnapshot {
        let counters = self.counters;
        if options.reset {
            self.counters = Counters::default();
        }
        MetricsSnapshot {
            calls: counters.calls,
            outcomes_true: counters.outcomes_true,
            outcomes_false: counters.calls - counters.outcomes_true,
            by_path: counters.by_path,
            mean_confidence: if counters.calls == 0 {
                0.0
            } else {
                counters.confidence_total / counters.calls as f64
            },
        }
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(super::config::defaults::HISTORY_CAPACITY)
    }
}
