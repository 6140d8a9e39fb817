//! Rule application and left-fold pipelines

use super::analysis::{now_ms, AnalysisState, Diagnostic, FactValue, HistoryEntry};
use crate::error::RuleError;
use crate::phoneme::tokenize;
use std::collections::BTreeMap;

/// What a rule derived from a state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutput {
    pub facts: BTreeMap<String, FactValue>,
    pub definitions: BTreeMap<String, Vec<String>>,
    /// Replaces this rule's previous diagnostic; `None` removes it
    pub diagnostic: Option<Diagnostic>,
    /// New surface form, if the rule transforms it
    pub surface: Option<String>,
    pub notes: Vec<String>,
}

impl RuleOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fact(mut self, key: impl Into<String>, value: impl Into<FactValue>) -> Self {
        self.facts.insert(key.into(), value.into());
        self
    }

    pub fn definition<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definitions
            .insert(name.into(), members.into_iter().map(Into::into).collect());
        self
    }

    pub fn diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }

    pub fn surface(mut self, surface: impl Into<String>) -> Self {
        self.surface = Some(surface.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// A grammar-rule collaborator
///
/// Implementations must be free of side effects and must not keep
/// references into the state they are given.
pub trait Rule {
    /// Stable identifier, used as diagnostics key and in history
    fn id(&self) -> &str;

    /// Derive facts, definitions and a diagnostic from `state`
    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError>;
}

/// A rule backed by a closure
pub struct FnRule<F> {
    id: String,
    f: F,
}

impl<F> FnRule<F>
where
    F: Fn(&AnalysisState) -> Result<RuleOutput, RuleError>,
{
    pub fn new(id: impl Into<String>, f: F) -> Self {
        Self { id: id.into(), f }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&AnalysisState) -> Result<RuleOutput, RuleError>,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        (self.f)(state)
    }
}

/// Shorthand for [`FnRule::new`]
pub fn rule_fn<F>(id: impl Into<String>, f: F) -> FnRule<F>
where
    F: Fn(&AnalysisState) -> Result<RuleOutput, RuleError>,
{
    FnRule::new(id, f)
}

fn merge_changed<V: PartialEq>(
    target: &mut BTreeMap<String, V>,
    source: BTreeMap<String, V>,
    prefix: &str,
    notes: &mut Vec<String>,
) {
    for (key, value) in source {
        if target.get(&key) != Some(&value) {
            notes.push(format!("{prefix}:{key}"));
        }
        target.insert(key, value);
    }
}

/// Apply one rule, returning a new state
///
/// The rule runs first; the new state is built only from a successful
/// output, and a rule error is returned unchanged. Facts and definitions
/// are merged with the rule's keys winning; the rule's diagnostic entry is
/// replaced wholesale; exactly one history entry is appended. A new surface
/// is tokenized again so later rules see its phonemes.
pub fn apply_rule(state: &AnalysisState, rule: &dyn Rule) -> Result<AnalysisState, RuleError> {
    let output = rule.apply(state)?;
    let rule_id = rule.id();

    let mut next = state.clone();
    let mut notes = Vec::new();

    merge_changed(&mut next.facts, output.facts, "fact", &mut notes);
    merge_changed(&mut next.definitions, output.definitions, "definition", &mut notes);

    let previous = match output.diagnostic {
        Some(diagnostic) => next.diagnostics.insert(rule_id.to_string(), diagnostic),
        None => next.diagnostics.remove(rule_id),
    };
    if previous.as_ref() != next.diagnostics.get(rule_id) {
        notes.push(format!("diagnostic:{rule_id}"));
    }

    if let Some(surface) = output.surface.filter(|surface| *surface != next.surface) {
        let stream = tokenize(&surface);
        next.meta.script = stream.script;
        next.meta.tokens = stream.tokens;
        next.surface = surface;
    }
    notes.extend(output.notes);

    tracing::debug!(
        rule = rule_id,
        changed = notes.len(),
        surface = %next.surface,
        "rule applied"
    );

    next.history.push(HistoryEntry {
        sequence: state.history.len(),
        rule_id: rule_id.to_string(),
        timestamp_ms: now_ms(),
        input: state.surface.clone(),
        output: next.surface.clone(),
        notes,
    });

    Ok(next)
}

/// Apply rules left to right, stopping at the first failure
pub fn apply_all<'r, I>(state: &AnalysisState, rules: I) -> Result<AnalysisState, RuleError>
where
    I: IntoIterator<Item = &'r dyn Rule>,
{
    let mut rules = rules.into_iter();
    let Some(first) = rules.next() else {
        return Ok(state.clone());
    };
    let start = apply_rule(state, first)?;
    rules.try_fold(start, |acc, rule| apply_rule(&acc, rule))
}

/// A named, ordered list of rules
pub struct Pipeline<'a> {
    name: String,
    rules: Vec<Box<dyn Rule + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    pub fn then(mut self, rule: impl Rule + 'a) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append every rule of another pipeline
    pub fn extend(mut self, other: Pipeline<'a>) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rule ids in application order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fold every rule over `state`
    pub fn run(&self, state: &AnalysisState) -> Result<AnalysisState, RuleError> {
        tracing::debug!(pipeline = %self.name, rules = self.rules.len(), "running pipeline");
        apply_all(state, self.rules.iter().map(|rule| rule.as_ref() as &dyn Rule))
    }
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("rules", &self.rule_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_state;

    fn set_fact(id: &'static str, key: &'static str, value: f64) -> impl Rule {
        rule_fn(id, move |_state: &AnalysisState| {
            Ok(RuleOutput::new().fact(key, value))
        })
    }

    #[test]
    fn test_input_state_is_untouched() {
        let s0 = create_state("gam");
        let before = s0.clone();
        let s1 = apply_rule(&s0, &set_fact("r1", "x", 1.0)).unwrap();

        assert_eq!(s0, before);
        assert_ne!(s0, s1);
        assert_eq!(s1.fact("x"), Some(&FactValue::Number(1.0)));
        assert_eq!(s1.history.len(), 1);
        assert_eq!(s1.history[0].notes, vec!["fact:x"]);
    }

    #[test]
    fn test_last_write_wins() {
        let s0 = create_state("gam");
        let s1 = apply_rule(&s0, &set_fact("r1", "x", 1.0)).unwrap();
        let s2 = apply_rule(&s1, &set_fact("r2", "x", 2.0)).unwrap();
        assert_eq!(s2.fact("x"), Some(&FactValue::Number(2.0)));
        assert_eq!(s1.fact("x"), Some(&FactValue::Number(1.0)));
    }

    #[test]
    fn test_unchanged_keys_are_not_noted() {
        let s0 = create_state("gam");
        let rule = set_fact("r1", "x", 1.0);
        let s1 = apply_rule(&s0, &rule).unwrap();
        let s2 = apply_rule(&s1, &rule).unwrap();
        assert!(s2.history[1].notes.is_empty());
        assert_eq!(s2.history[1].sequence, 1);
    }

    #[test]
    fn test_diagnostics_replace_not_merge() {
        let first = rule_fn("r", |_: &AnalysisState| {
            Ok(RuleOutput::new().diagnostic(Diagnostic::Note {
                message: "first".into(),
            }))
        });
        let second = rule_fn("r", |_: &AnalysisState| {
            Ok(RuleOutput::new().diagnostic(Diagnostic::Tokens {
                script: crate::script::ScriptTag::Latin,
                tokens: vec![],
            }))
        });
        let silent = rule_fn("r", |_: &AnalysisState| Ok(RuleOutput::new()));

        let s1 = apply_rule(&create_state("a"), &first).unwrap();
        let s2 = apply_rule(&s1, &second).unwrap();
        assert!(matches!(s2.diagnostic("r"), Some(Diagnostic::Tokens { .. })));
        let s3 = apply_rule(&s2, &silent).unwrap();
        assert!(s3.diagnostic("r").is_none());
        assert_eq!(s3.history[2].notes, vec!["diagnostic:r"]);
    }

    #[test]
    fn test_definitions_merge() {
        let rule = rule_fn("defs", |_: &AnalysisState| {
            Ok(RuleOutput::new().definition("guṇa", ["a", "e", "o"]))
        });
        let state = apply_rule(&create_state("a"), &rule).unwrap();
        assert_eq!(state.definition("guṇa").unwrap(), ["a", "e", "o"]);
    }

    #[test]
    fn test_surface_transition_recorded() {
        let rule = rule_fn("t", |_: &AnalysisState| Ok(RuleOutput::new().surface("gata")));
        let state = apply_rule(&create_state("gam"), &rule).unwrap();
        assert_eq!(state.surface, "gata");
        assert_eq!(state.history[0].input, "gam");
        assert_eq!(state.history[0].output, "gata");
    }

    #[test]
    fn test_new_surface_is_retokenized() {
        let s0 = create_state("gam");
        let rule = rule_fn("t", |_: &AnalysisState| Ok(RuleOutput::new().surface("गत")));
        let s1 = apply_rule(&s0, &rule).unwrap();
        assert_eq!(s1.stream().join(), "गत");
        assert_eq!(s1.meta.script, crate::script::ScriptTag::Devanagari);
        assert_eq!(s1.meta.created_ms, s0.meta.created_ms);
        assert_eq!(s0.meta.tokens, vec!["g", "a", "m"]);
    }

    #[test]
    fn test_rule_error_propagates_unchanged() {
        let failing = rule_fn("boom", |_: &AnalysisState| Err(RuleError::failed("boom", "no")));
        let pipeline = Pipeline::new("p")
            .then(set_fact("ok", "x", 1.0))
            .then(failing)
            .then(set_fact("never", "y", 1.0));

        let err = pipeline.run(&create_state("gam")).unwrap_err();
        assert_eq!(err, RuleError::failed("boom", "no"));
    }

    #[test]
    fn test_pipeline_preserves_order() {
        let pipeline = Pipeline::new("p")
            .then(set_fact("a", "x", 1.0))
            .then(set_fact("b", "y", 2.0))
            .then(set_fact("c", "x", 3.0));
        assert_eq!(pipeline.rule_ids(), vec!["a", "b", "c"]);

        let state = pipeline.run(&create_state("gam")).unwrap();
        assert_eq!(state.applied_rules(), vec!["a", "b", "c"]);
        assert_eq!(state.fact("x"), Some(&FactValue::Number(3.0)));
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let s0 = create_state("gam");
        let pipeline = Pipeline::new("empty");
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run(&s0).unwrap(), s0);
    }
}
