//! Sanskrit phonological and morphological analysis engine
//!
//! The crate is built from four pieces that feed one another:
//!
//! - **Script classification**: [`script::classify`] tags a surface form as
//!   Latin (IAST), Devanagari, mixed or unknown.
//! - **Phoneme tokenization**: [`phoneme::tokenize`] splits a form into
//!   phonetic units with a longest-match candidate table chosen by script.
//! - **Blocking classifier**: [`evidence`] decides whether root truncation
//!   before an affix is blocked, from curated tables or from weighted,
//!   independent evidence signals.
//! - **Rule pipeline**: [`state`] threads an immutable [`AnalysisState`]
//!   through ordered rules, recording one history entry per rule.
//!
//! # Example
//!
//! ```rust
//! use shabda_core::evidence::{ClassifierConfig, Mode};
//! use shabda_core::script::ScriptTag;
//! use shabda_core::state::{complete, create_state, MorphologyRequest};
//! use shabda_core::rules::Operation;
//!
//! let stream = shabda_core::tokenize("kaurava");
//! assert_eq!(stream.script, ScriptTag::Latin);
//! assert_eq!(stream.tokens, vec!["k", "au", "r", "a", "v", "a"]);
//!
//! let config = ClassifierConfig::default();
//! let decision = shabda_core::evidence::evaluate("gam", "ya", Mode::RulesOnly, &config);
//! assert!(decision.outcome);
//!
//! let request = MorphologyRequest::new("gam", "ya", Operation::Guna);
//! let state = complete(&create_state("gam"), &request, &config).unwrap();
//! assert_eq!(state.history.len(), 6);
//! ```

pub mod error;
pub mod evidence;
pub mod phoneme;
pub mod rules;
pub mod script;
pub mod state;

pub use error::{ConfigError, RuleError, UnknownOperation};
pub use evidence::{Classifier, ClassifierConfig, Decision, Mode, PartialConfig};
pub use phoneme::{tokenize, PhonemeStream};
pub use rules::Operation;
pub use script::{classify as classify_script, ScriptTag};
pub use state::{apply_rule, create_state, AnalysisState, Pipeline, Rule, RuleOutput};
