//! Integration tests for the blocking classifier

use proptest::prelude::*;
use shabda_core::evidence::{
    evaluate, BlockingQuery, Classifier, ClassifierConfig, DecisionPath, EvidenceSignal, Mode,
    PartialConfig, PartialSquashing, ReadOptions,
};
use std::io::Write;

const ROOTS: &[&str] = &[
    "gam", "han", "man", "sad", "budh", "kṛ", "bhū", "śam", "kram", "jan", "pac", "nī", "गम्",
];
const AFFIXES: &[&str] = &["kta", "ktvā", "ya", "kyap", "tṛc", "tumun", "lyuṭ", "śap", "xyz"];

fn scored(root: &str, affix: &str, config: &ClassifierConfig) -> shabda_core::Decision {
    evaluate(root, affix, Mode::RulesOnly, config)
}

#[test]
fn gam_ya_is_blocked_with_high_confidence() {
    let decision = scored("gam", "ya", &ClassifierConfig::default());
    assert!(decision.outcome);
    assert!(decision.confidence > 0.8, "confidence {}", decision.confidence);
    assert_eq!(decision.path, DecisionPath::Scored);
    assert!((decision.weighted_sum - 5.25).abs() < 1e-9);
}

#[test]
fn sad_kta_is_not_blocked() {
    let config = ClassifierConfig::default();
    let decision = scored("sad", "kta", &config);
    assert!(!decision.outcome);
    assert!(decision.confidence >= config.squashing.floor_non_lopa);
    assert!(!decision.has_signal(EvidenceSignal::RootFinalNasal));
    assert!(decision.rationale.contains("< threshold"));
}

#[test]
fn lookup_mode_consults_tables_first() {
    let config = ClassifierConfig::default();

    let excluded = evaluate("śam", "kta", Mode::Lookup, &config);
    assert_eq!(excluded.path, DecisionPath::Exclusion);
    assert!(!excluded.outcome);

    let included = evaluate("gam", "kta", Mode::Lookup, &config);
    assert_eq!(included.path, DecisionPath::Inclusion);
    assert!(included.outcome);
    assert_eq!(included.confidence, config.inclusion_confidence);

    // rules mode ignores the tables
    assert_eq!(evaluate("śam", "kta", Mode::RulesOnly, &config).path, DecisionPath::Scored);
}

#[test]
fn native_script_roots_score_like_latin() {
    let config = ClassifierConfig::default();
    let latin = scored("gam", "ya", &config);
    let native = scored("गम्", "ya", &config);
    assert_eq!(latin.outcome, native.outcome);
    assert_eq!(latin.weighted_sum, native.weighted_sum);
}

#[test]
fn empty_input_is_degenerate() {
    let config = ClassifierConfig::default();
    for (root, affix) in [("", "kta"), ("gam", ""), ("  ", "ya"), ("123", "kta")] {
        let decision = evaluate(root, affix, Mode::Lookup, &config);
        assert_eq!(decision.path, DecisionPath::InvalidInput, "{root:?} + {affix:?}");
        assert!(!decision.outcome);
        assert!(decision.contributing_signals.is_empty());
    }
}

#[test]
fn unreachable_threshold_never_blocks() {
    let config = ClassifierConfig::default().merged(&PartialConfig::new().threshold(100.0));
    for root in ROOTS {
        for affix in AFFIXES {
            assert!(!scored(root, affix, &config).outcome);
        }
    }
}

#[test]
fn classifier_overrides_are_scoped() {
    let mut classifier = Classifier::default();
    let strict = PartialConfig::new().threshold(10.0);

    let scoped = classifier.classify_with("gam", "ya", Some(Mode::RulesOnly), Some(&strict));
    assert!(!scoped.outcome);

    let plain = classifier.classify_with("gam", "ya", Some(Mode::RulesOnly), None);
    assert!(plain.outcome);
    assert_eq!(classifier.config().threshold, 3.5);
}

#[test]
fn diagnostics_record_calls_in_order() {
    let mut classifier = Classifier::default();
    classifier.set_mode(Mode::RulesOnly);
    let queries = vec![
        BlockingQuery::new("gam", "ya"),
        BlockingQuery::new("sad", "kta"),
        BlockingQuery::new("gam", "kta").with_mode(Mode::Lookup),
    ];
    let decisions = classifier.classify_batch(&queries);
    assert_eq!(decisions.len(), 3);
    assert_eq!(decisions[2].path, DecisionPath::Inclusion);

    let snapshot = classifier.diagnostics(ReadOptions::default());
    let affixes: Vec<_> = snapshot.decisions.iter().map(|d| d.affix.as_str()).collect();
    assert_eq!(affixes, vec!["ya", "kta", "kta"]);
    assert_eq!(snapshot.decisions[2].mode, Mode::Lookup);

    let metrics = classifier.metrics(ReadOptions::reset());
    assert_eq!(metrics.calls, 3);
    assert_eq!(metrics.outcomes_true, 2);
    assert_eq!(metrics.by_path.inclusion, 1);
    assert_eq!(classifier.metrics(ReadOptions::default()).calls, 0);
}

#[test]
fn config_file_round_trip() {
    let config = ClassifierConfig::default().merged(
        &PartialConfig::new()
            .mode(Mode::RulesOnly)
            .threshold(2.0)
            .weight(EvidenceSignal::AffixKitClass, 3.0)
            .squashing(PartialSquashing {
                cap: Some(0.9),
                ..Default::default()
            }),
    );

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config.to_toml_string().unwrap().as_bytes()).unwrap();
    file.flush().unwrap();

    let loaded = ClassifierConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.weight(EvidenceSignal::AffixKitClass), 3.0);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClassifierConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn broken_config_is_an_error() {
    assert!(ClassifierConfig::from_toml_str("threshold = [").is_err());
    assert!(ClassifierConfig::from_toml_str("threshold = \"high\"").is_err());
}

fn pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    (prop::sample::select(ROOTS), prop::sample::select(AFFIXES))
}

proptest! {
    #[test]
    fn confidence_stays_in_unit_interval(
        (root, affix) in pair(),
        threshold in -10.0f64..10.0,
        slope in -5.0f64..5.0,
        cap in 0.0f64..2.0,
    ) {
        let config = ClassifierConfig::default().merged(
            &PartialConfig::new().threshold(threshold).squashing(PartialSquashing {
                slope: Some(slope),
                cap: Some(cap),
                ..Default::default()
            }),
        );
        for mode in [Mode::Lookup, Mode::RulesOnly] {
            let decision = evaluate(root, affix, mode, &config);
            prop_assert!((0.0..=1.0).contains(&decision.confidence));
        }
    }

    #[test]
    fn raising_a_weight_never_lowers_confidence(
        (root, affix) in pair(),
        signal in prop::sample::select(EvidenceSignal::ALL.to_vec()),
        bump in 0.0f64..5.0,
    ) {
        let base = ClassifierConfig::default();
        let raised = base.merged(
            &PartialConfig::new().weight(signal, base.weight(signal) + bump),
        );
        let before = scored(root, affix, &base);
        let after = scored(root, affix, &raised);
        prop_assert!(after.confidence >= before.confidence);
        prop_assert!(after.outcome || !before.outcome);
    }

    #[test]
    fn raising_the_threshold_never_adds_blocking(
        (root, affix) in pair(),
        low in 0.0f64..6.0,
        delta in 0.0f64..6.0,
    ) {
        let base = ClassifierConfig::default();
        let lower = base.merged(&PartialConfig::new().threshold(low));
        let higher = base.merged(&PartialConfig::new().threshold(low + delta));
        let before = scored(root, affix, &lower);
        let after = scored(root, affix, &higher);
        prop_assert!(before.outcome || !after.outcome);
    }

    #[test]
    fn evaluation_is_deterministic((root, affix) in pair()) {
        let config = ClassifierConfig::default();
        let a = evaluate(root, affix, Mode::Lookup, &config);
        let b = evaluate(root, affix, Mode::Lookup, &config);
        prop_assert_eq!(a.outcome, b.outcome);
        prop_assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
        prop_assert_eq!(a.rationale, b.rationale);
    }
}
