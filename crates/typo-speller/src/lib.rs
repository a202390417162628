//! Lookup and suggestion engine for Hunspell-style dictionaries.
//!
//! The [`Typo`] handle loads a dictionary (affix file plus word list),
//! answers `check` queries with the usual case variants, and generates
//! ranked spelling suggestions.
//!
//! ```
//! use hashbrown::HashMap;
//! use typo_speller::Typo;
//!
//! let typo = Typo::from_data("SFX S Y 1\nSFX S 0 s .\n", "1\ncat/S\n", &HashMap::new())?;
//! assert!(typo.check("cats")?);
//! assert_eq!(typo.suggest("cta")?, vec!["cat", "cats"]);
//! # Ok::<(), typo_speller::TypoError>(())
//! ```
//!
//! # Architecture
//!
//! - [`speller`] -- exact and case-variant lookups over a built dictionary
//! - [`suggestion`] -- edit generators, search strategy, scoring and memo
//! - [`settings`] -- construction settings and suggestion options
//! - [`loader`] -- locating and reading dictionary source files
//! - [`handle`] -- the [`Typo`] handle tying everything together

pub mod handle;
pub mod loader;
pub mod settings;
pub mod speller;
pub mod suggestion;

pub use handle::{Typo, TypoError};
#[cfg(feature = "async")]
pub use settings::LoadedCallback;
pub use settings::{SuggestOptions, TypoSettings};
pub use speller::{DictionarySpeller, Speller};
pub use suggestion::DistanceMetric;
