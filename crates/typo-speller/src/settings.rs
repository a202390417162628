// Construction settings and suggestion options

use std::fmt;
use std::path::PathBuf;
#[cfg(feature = "async")]
use std::sync::Arc;

use hashbrown::HashMap;

use crate::suggestion::DistanceMetric;

/// Environment variable overriding the default dictionary base path.
pub const DICTIONARY_PATH_ENV: &str = "TYPO_DICTIONARY_PATH";

/// Base path used when neither the settings nor the environment name one.
pub const DEFAULT_DICTIONARY_DIR: &str = "dictionaries";

/// Called with the ready handle once asynchronous loading has finished.
#[cfg(feature = "async")]
pub type LoadedCallback = Arc<dyn Fn(&crate::Typo) + Send + Sync>;

/// Settings accepted when constructing a [`Typo`](crate::Typo) handle.
#[derive(Clone, Default)]
pub struct TypoSettings {
    /// Directory holding `<dictionary>/<dictionary>.aff` and `.dic`.
    pub dictionary_path: Option<PathBuf>,
    /// Pre-seeded flag map. Declarations in the affix file win.
    pub flags: HashMap<String, String>,
    /// Read missing source files on a tokio task instead of blocking.
    #[cfg(feature = "async")]
    pub async_load: bool,
    /// Invoked with the ready handle after an asynchronous load.
    #[cfg(feature = "async")]
    pub loaded_callback: Option<LoadedCallback>,
}

impl TypoSettings {
    /// The directory dictionaries are looked up in: the configured path,
    /// else `$TYPO_DICTIONARY_PATH`, else `./dictionaries`.
    pub fn base_path(&self) -> PathBuf {
        if let Some(path) = &self.dictionary_path {
            return path.clone();
        }
        match std::env::var_os(DICTIONARY_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_DICTIONARY_DIR),
        }
    }
}

impl fmt::Debug for TypoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TypoSettings");
        s.field("dictionary_path", &self.dictionary_path)
            .field("flags", &self.flags);
        #[cfg(feature = "async")]
        s.field("async_load", &self.async_load)
            .field("loaded_callback", &self.loaded_callback.is_some());
        s.finish()
    }
}

/// Options controlling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Number of suggestions returned by `suggest`.
    pub max_suggestions: usize,
    /// Search depth, length band and score cut-off.
    pub max_edit_distance: usize,
    pub metric: DistanceMetric,
    /// Characters used by substitutions and insertions. `None` means
    /// `a`-`z` plus the dictionary's `TRY` and `WORDCHARS` characters.
    pub alphabet: Option<String>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_edit_distance: 2,
            metric: DistanceMetric::Transposition,
            alphabet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let settings = TypoSettings {
            dictionary_path: Some(PathBuf::from("/srv/dicts")),
            ..Default::default()
        };
        assert_eq!(settings.base_path(), PathBuf::from("/srv/dicts"));
    }

    #[test]
    fn suggest_defaults() {
        let options = SuggestOptions::default();
        assert_eq!(options.max_suggestions, 5);
        assert_eq!(options.max_edit_distance, 2);
        assert_eq!(options.metric, DistanceMetric::Transposition);
        assert!(options.alphabet.is_none());
    }

    #[test]
    fn debug_output_names_fields() {
        let text = format!("{:?}", TypoSettings::default());
        assert!(text.contains("dictionary_path"));
        assert!(text.contains("flags"));
    }
}
