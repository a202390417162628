//! Asynchronous loading through a tokio runtime.
//!
//! Run: cargo test -p typo-speller --features async --test async_load

#![cfg(feature = "async")]

use std::path::PathBuf;
use std::sync::Arc;

use typo_speller::{Typo, TypoError, TypoSettings};

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data")
}

fn async_settings() -> TypoSettings {
    TypoSettings {
        dictionary_path: Some(test_data_dir()),
        async_load: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn loads_from_files_in_background() {
    let typo = Typo::new(Some("en_mini"), None, None, async_settings()).unwrap();
    typo.wait_loaded().await.unwrap();
    assert!(typo.is_loaded());
    assert!(typo.check("rewalkers").unwrap());
    assert_eq!(typo.suggest("teh").unwrap(), vec!["tea", "ten", "the", "then"]);
}

#[tokio::test]
async fn callback_receives_ready_handle() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let settings = TypoSettings {
        loaded_callback: Some(Arc::new(move |typo: &Typo| {
            let _ = tx.send(typo.check("cats").unwrap_or(false));
        })),
        ..async_settings()
    };

    let typo = Typo::new(Some("en_mini"), None, None, settings).unwrap();
    assert_eq!(rx.recv().await, Some(true));
    assert!(typo.is_loaded());
}

#[tokio::test]
async fn clones_observe_the_same_load() {
    let typo = Typo::new(Some("en_mini"), None, None, async_settings()).unwrap();
    let clone = typo.clone();
    typo.wait_loaded().await.unwrap();
    assert!(clone.is_loaded());
    assert!(clone.check("unlocked").unwrap());
}

#[tokio::test]
async fn inline_texts_load_asynchronously() {
    let typo = Typo::new(
        Some("inline"),
        Some("SFX S Y 1\nSFX S 0 s .\n".to_string()),
        Some("1\ncat/S\n".to_string()),
        async_settings(),
    )
    .unwrap();
    typo.wait_loaded().await.unwrap();
    assert!(typo.check("cats").unwrap());
}

#[tokio::test]
async fn missing_files_load_empty() {
    let settings = TypoSettings {
        dictionary_path: Some(PathBuf::from("/nonexistent/typo")),
        ..async_settings()
    };
    let typo = Typo::new(Some("en_mini"), None, None, settings).unwrap();
    typo.wait_loaded().await.unwrap();
    assert!(typo.is_loaded());
    assert_eq!(typo.word_count().unwrap(), 0);
    assert!(!typo.check("a").unwrap());
    assert!(typo.suggest("a").unwrap().is_empty());
}

#[tokio::test]
async fn malformed_data_never_becomes_ready() {
    let typo = Typo::new(
        Some("broken"),
        Some("SFX S Y 2\nSFX S 0 s .\n".to_string()),
        Some("1\ncat/S\n".to_string()),
        async_settings(),
    )
    .unwrap();
    assert!(matches!(typo.wait_loaded().await, Err(TypoError::NotLoaded)));
    assert!(matches!(typo.check("cat"), Err(TypoError::NotLoaded)));
}

#[tokio::test]
async fn unnamed_handle_never_loads() {
    let typo = Typo::new(None, None, None, async_settings()).unwrap();
    assert!(matches!(typo.wait_loaded().await, Err(TypoError::NotLoaded)));
}

#[test]
fn async_load_requires_a_runtime() {
    let result = Typo::new(Some("en_mini"), None, None, async_settings());
    assert!(matches!(result, Err(TypoError::NoRuntime)));
}

#[test]
fn synchronous_load_ignores_callback() {
    let called = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let settings = TypoSettings {
        dictionary_path: Some(test_data_dir()),
        loaded_callback: Some(Arc::new(move |_: &Typo| {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        })),
        ..Default::default()
    };
    let typo = Typo::new(Some("en_mini"), None, None, settings).unwrap();
    assert!(typo.is_loaded());
    assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
}
