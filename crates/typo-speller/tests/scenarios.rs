//! End-to-end scenarios against the `en_mini` test dictionary.
//!
//! The dictionary lives in `test-data/en_mini` at the workspace root and
//! the expected results in `test-data/en_mini/golden.json`.
//!
//! Run: cargo test -p typo-speller --test scenarios

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use typo_speller::{DistanceMetric, Typo, TypoError, TypoSettings};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data")
}

#[derive(Debug, Deserialize)]
struct Golden {
    word_count: usize,
    rule_count: usize,
    check: BTreeMap<String, bool>,
    suggest: Vec<SuggestCase>,
}

#[derive(Debug, Deserialize)]
struct SuggestCase {
    word: String,
    limit: usize,
    expected: Vec<String>,
}

fn load_golden() -> Golden {
    let path = test_data_dir().join("en_mini/golden.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn settings() -> TypoSettings {
    TypoSettings {
        dictionary_path: Some(test_data_dir()),
        ..Default::default()
    }
}

fn open() -> Typo {
    Typo::new(Some("en_mini"), None, None, settings())
        .unwrap_or_else(|e| panic!("failed to load en_mini: {}", e))
}

// ---------------------------------------------------------------------------
// Golden comparisons
// ---------------------------------------------------------------------------

#[test]
fn dictionary_statistics_match() {
    let golden = load_golden();
    let typo = open();
    assert!(typo.is_loaded());
    assert_eq!(typo.name(), Some("en_mini"));
    assert_eq!(typo.word_count().unwrap(), golden.word_count);
    assert_eq!(typo.rule_count().unwrap(), golden.rule_count);
}

#[test]
fn check_matches_golden() {
    let golden = load_golden();
    let typo = open();

    let mismatches: Vec<String> = golden
        .check
        .iter()
        .filter(|(word, expected)| typo.check(word).unwrap() != **expected)
        .map(|(word, expected)| format!("{word:?}: expected {expected}"))
        .collect();

    assert!(mismatches.is_empty(), "check mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn suggest_matches_golden() {
    let golden = load_golden();
    let typo = open();

    for case in &golden.suggest {
        let got = typo.suggest_with_limit(&case.word, case.limit).unwrap();
        assert_eq!(
            got, case.expected,
            "suggest({:?}, limit {})",
            case.word, case.limit
        );
    }
}

// ---------------------------------------------------------------------------
// Behaviour across calls
// ---------------------------------------------------------------------------

#[test]
fn repeated_suggest_is_stable() {
    let typo = open();
    let first = typo.suggest("teh").unwrap();
    let second = typo.suggest("teh").unwrap();
    assert_eq!(first, second);
    assert_eq!(typo.suggest_with_limit("teh", 1).unwrap(), vec!["tea"]);
}

#[test]
fn smaller_limit_then_larger_limit() {
    let typo = open();
    assert_eq!(typo.suggest_with_limit("teh", 1).unwrap(), vec!["tea"]);
    // The memo entry for limit 1 must not cap a later, larger request.
    assert_eq!(
        typo.suggest_with_limit("teh", 5).unwrap(),
        vec!["tea", "ten", "the", "then"]
    );
}

#[test]
fn levenshtein_metric_reorders_transpositions() {
    let mut typo = open();
    typo.set_distance_metric(DistanceMetric::Levenshtein);
    // "the" is now two edits away, tied with "then".
    assert_eq!(
        typo.suggest("teh").unwrap(),
        vec!["tea", "ten", "the", "then"]
    );
    // A swap costs two edits; "fat" needs three and drops out.
    assert_eq!(typo.suggest("cta").unwrap(), vec!["cat", "cats", "tea"]);
}

#[test]
fn single_edit_search() {
    let mut typo = open();
    typo.set_max_edit_distance(1);
    assert_eq!(typo.suggest("teh").unwrap(), vec!["tea", "ten", "the"]);
    assert_eq!(typo.suggest("walkd").unwrap(), vec!["walk", "walked", "walks"]);
}

#[test]
fn inline_sources_skip_the_filesystem() {
    let aff = std::fs::read_to_string(test_data_dir().join("en_mini/en_mini.aff")).unwrap();
    let dic = std::fs::read_to_string(test_data_dir().join("en_mini/en_mini.dic")).unwrap();
    let settings = TypoSettings {
        dictionary_path: Some(PathBuf::from("/nonexistent/typo")),
        ..Default::default()
    };
    let typo = Typo::new(Some("en_mini"), Some(aff), Some(dic), settings).unwrap();
    assert!(typo.check("rewalking").unwrap());
}

#[test]
fn unknown_dictionary_loads_empty() {
    let typo = Typo::new(Some("xx_XX"), None, None, settings()).unwrap();
    assert!(typo.is_loaded());
    assert_eq!(typo.word_count().unwrap(), 0);
    assert!(!typo.check("cat").unwrap());
    assert!(typo.suggest("cat").unwrap().is_empty());
}

#[test]
fn unnamed_handle_is_not_loaded() {
    let typo = Typo::new(None, None, None, settings()).unwrap();
    assert!(matches!(typo.check("cat"), Err(TypoError::NotLoaded)));
    assert!(matches!(typo.suggest("cat"), Err(TypoError::NotLoaded)));
}
