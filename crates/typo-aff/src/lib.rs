//! Affix-file parsing and dictionary expansion.
//!
//! This crate turns the two text sources of a Hunspell-style dictionary
//! (the `.aff` rule file and the `.dic` word list) into immutable lookup
//! structures. Construction happens once; nothing is added or removed
//! afterwards.
//!
//! # Architecture
//!
//! - [`affix`] -- `.aff` directive parsing into rules, compound rules,
//!   replacement pairs and flags
//! - [`expand`] -- application of prefix/suffix rules, including
//!   continuation chains
//! - [`table`] -- the word-form table and its tagged lookup result
//! - [`compound`] -- compound-rule tokenization and pattern compilation
//! - [`dictionary`] -- `.dic` parsing and the assembled [`Dictionary`]

pub mod affix;
pub mod compound;
pub mod dictionary;
pub mod expand;
pub mod table;

pub use affix::{AffixData, AffixEntry, AffixRule, ReplacementPair};
pub use compound::CompoundRules;
pub use dictionary::Dictionary;
pub use table::{DictionaryTable, Lookup, WordEntry};

/// Error type for affix and dictionary parsing.
#[derive(Debug, thiserror::Error)]
pub enum AffixError {
    #[error("line {line}: {directive} is missing a required field")]
    MissingField { line: usize, directive: String },
    #[error("line {line}: invalid entry count {value:?} for {directive}")]
    InvalidCount {
        line: usize,
        directive: String,
        value: String,
    },
    #[error("{directive} block declares {expected} entries but only {found} lines follow")]
    Truncated {
        directive: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid condition pattern {pattern:?}: {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("compound rule {rule:?} does not compile: {source}")]
    InvalidCompoundRule {
        rule: String,
        #[source]
        source: regex::Error,
    },
}
