// Typo: top-level handle for dictionary loading, lookups and suggestions.
//
// Design notes:
// - The built dictionary lives in a `OnceLock` behind an `Arc`, so an
//   asynchronous loader task and the caller observe the same state. It is
//   written exactly once and never mutated afterwards.
// - Lookups create a lightweight `DictionarySpeller` view on the fly in
//   each method call.
// - The suggestion memo belongs to one handle value. It is wrapped in a
//   `Mutex` so `&self` methods can fill it and the handle stays
//   `Send + Sync`.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use hashbrown::HashMap;
use typo_aff::{AffixError, Dictionary};
use typo_core::enums::{TRY, WORDCHARS};

use crate::loader;
use crate::settings::{SuggestOptions, TypoSettings};
use crate::speller::DictionarySpeller;
use crate::suggestion::cache::MAX_SIZE_PARAM;
use crate::suggestion::generators::{build_alphabet, custom_alphabet};
use crate::suggestion::{
    DistanceMetric, SuggestionCache, SuggestionStatus, SuggestionStrategy, default_strategy,
    replacement_suggestion,
};

/// Error type for handle construction and lookups.
#[derive(Debug, thiserror::Error)]
pub enum TypoError {
    /// A lookup was made before the dictionary finished loading.
    #[error("dictionary not loaded")]
    NotLoaded,

    /// The affix data could not be parsed.
    #[error("invalid dictionary data: {0}")]
    Affix(#[from] AffixError),

    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Asynchronous loading was requested outside a tokio runtime.
    #[error("asynchronous loading requires a running tokio runtime")]
    NoRuntime,
}

/// Everything built from the two source texts.
struct Loaded {
    dictionary: Dictionary,
    /// Default suggestion alphabet for this dictionary.
    alphabet: Vec<char>,
}

impl Loaded {
    fn build(aff: &str, dic: &str, flags: &HashMap<String, String>) -> Result<Self, AffixError> {
        let dictionary = Dictionary::build(aff, dic, flags)?;
        let alphabet = build_alphabet(
            [dictionary.flag(TRY), dictionary.flag(WORDCHARS)]
                .into_iter()
                .flatten(),
        );
        Ok(Self {
            dictionary,
            alphabet,
        })
    }
}

#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Pending,
    Ready,
    /// Nothing is being loaded, or loading failed.
    Unavailable,
}

/// State shared by every clone of a handle and its loader task.
struct Shared {
    name: Option<String>,
    loaded: OnceLock<Loaded>,
    strategy: SuggestionStrategy,
    #[cfg(feature = "async")]
    state: tokio::sync::watch::Sender<LoadState>,
}

impl Shared {
    fn new(name: Option<String>) -> Self {
        #[cfg(feature = "async")]
        let initial = if name.is_some() {
            LoadState::Pending
        } else {
            LoadState::Unavailable
        };
        Self {
            name,
            loaded: OnceLock::new(),
            strategy: default_strategy(),
            #[cfg(feature = "async")]
            state: tokio::sync::watch::channel(initial).0,
        }
    }

    fn install(&self, aff: &str, dic: &str, flags: &HashMap<String, String>) -> Result<(), TypoError> {
        let loaded = Loaded::build(aff, dic, flags)?;
        log::info!(
            "loaded dictionary {}: {} rules, {} word forms, {} compound rules",
            self.name.as_deref().unwrap_or("<inline>"),
            loaded.dictionary.affixes().rules.len(),
            loaded.dictionary.table().len(),
            loaded.dictionary.compound_rules().len()
        );
        if self.loaded.set(loaded).is_err() {
            log::debug!("dictionary was already loaded; keeping the first one");
        }
        #[cfg(feature = "async")]
        self.state.send_replace(LoadState::Ready);
        Ok(())
    }
}

/// Spell checker handle over one Hunspell-style dictionary.
///
/// Provides spell checking and suggestion generation. All lookups fail
/// with [`TypoError::NotLoaded`] until the dictionary has been built.
pub struct Typo {
    shared: Arc<Shared>,
    options: SuggestOptions,
    memo_cache_size: u32,
    /// Memo of finished suggestion searches.
    cache: Mutex<SuggestionCache>,
}

impl Typo {
    /// Create a handle for the dictionary named `dictionary`.
    ///
    /// Source texts not supplied in `aff_data`/`dic_data` are read from
    /// `<base>/<dictionary>/<dictionary>.aff` and `.dic` (see
    /// [`TypoSettings::base_path`]). A file that cannot be read is logged
    /// and treated as empty. Without a dictionary name the handle stays
    /// unloaded.
    ///
    /// With `async_load` set (feature `async`) the handle is returned at
    /// once and loaded on a tokio task.
    pub fn new(
        dictionary: Option<&str>,
        aff_data: Option<String>,
        dic_data: Option<String>,
        settings: TypoSettings,
    ) -> Result<Self, TypoError> {
        let Some(dictionary) = dictionary else {
            log::debug!("no dictionary named; handle stays unloaded");
            return Ok(Self::unloaded());
        };

        let typo = Self::with_shared(Shared::new(Some(dictionary.to_string())));
        let (aff_path, dic_path) = loader::source_paths(&settings.base_path(), dictionary);

        #[cfg(feature = "async")]
        {
            if settings.async_load {
                typo.spawn_load(aff_data, dic_data, aff_path, dic_path, settings)?;
                return Ok(typo);
            }
        }

        let aff = aff_data.unwrap_or_else(|| loader::read_source(&aff_path));
        let dic = dic_data.unwrap_or_else(|| loader::read_source(&dic_path));
        typo.shared.install(&aff, &dic, &settings.flags)?;
        Ok(typo)
    }

    /// Build a loaded handle directly from source texts.
    pub fn from_data(
        aff_data: &str,
        dic_data: &str,
        flags: &HashMap<String, String>,
    ) -> Result<Self, TypoError> {
        let typo = Self::unloaded();
        typo.shared.install(aff_data, dic_data, flags)?;
        Ok(typo)
    }

    /// A handle with no dictionary. Every lookup returns `NotLoaded`.
    pub fn unloaded() -> Self {
        Self::with_shared(Shared::new(None))
    }

    fn with_shared(shared: Shared) -> Self {
        let memo_cache_size = 0;
        Self {
            shared: Arc::new(shared),
            options: SuggestOptions::default(),
            memo_cache_size,
            cache: Mutex::new(SuggestionCache::new(memo_cache_size)),
        }
    }

    #[cfg(feature = "async")]
    fn spawn_load(
        &self,
        aff_data: Option<String>,
        dic_data: Option<String>,
        aff_path: PathBuf,
        dic_path: PathBuf,
        settings: TypoSettings,
    ) -> Result<(), TypoError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| TypoError::NoRuntime)?;
        let typo = self.clone();

        runtime.spawn(async move {
            let aff = match aff_data {
                Some(text) => text,
                None => loader::read_source_async(&aff_path).await,
            };
            let dic = match dic_data {
                Some(text) => text,
                None => loader::read_source_async(&dic_path).await,
            };

            match typo.shared.install(&aff, &dic, &settings.flags) {
                Ok(()) => {
                    if let Some(callback) = &settings.loaded_callback {
                        callback(&typo);
                    }
                }
                Err(err) => {
                    log::error!("failed to build dictionary: {err}");
                    typo.shared.state.send_replace(LoadState::Unavailable);
                }
            }
        });
        Ok(())
    }

    /// Wait until an asynchronous load has finished.
    ///
    /// Returns `NotLoaded` if the handle has no dictionary or building
    /// it failed.
    #[cfg(feature = "async")]
    pub async fn wait_loaded(&self) -> Result<(), TypoError> {
        let mut state = self.shared.state.subscribe();
        let current = *state
            .wait_for(|s| *s != LoadState::Pending)
            .await
            .map_err(|_| TypoError::NotLoaded)?;
        match current {
            LoadState::Ready => Ok(()),
            LoadState::Pending | LoadState::Unavailable => Err(TypoError::NotLoaded),
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    fn loaded(&self) -> Result<&Loaded, TypoError> {
        self.shared.loaded.get().ok_or(TypoError::NotLoaded)
    }

    fn speller(&self) -> Result<DictionarySpeller<'_>, TypoError> {
        Ok(DictionarySpeller::new(&self.loaded()?.dictionary))
    }

    /// Whether the dictionary has been built.
    pub fn is_loaded(&self) -> bool {
        self.shared.loaded.get().is_some()
    }

    /// The dictionary name given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.shared.name.as_deref()
    }

    /// The built dictionary.
    pub fn dictionary(&self) -> Result<&Dictionary, TypoError> {
        Ok(&self.loaded()?.dictionary)
    }

    /// Check whether a word is correctly spelled, allowing the usual case
    /// variants. Surrounding whitespace is ignored.
    pub fn check(&self, word: &str) -> Result<bool, TypoError> {
        Ok(self.speller()?.check(word))
    }

    /// Check a word exactly as written.
    pub fn check_exact(&self, word: &str) -> Result<bool, TypoError> {
        Ok(self.speller()?.check_exact(word))
    }

    /// Whether `word` (or the explicit `codes`) carries the code assigned
    /// to the global flag `flag`.
    pub fn has_flag(
        &self,
        word: &str,
        flag: &str,
        codes: Option<&[String]>,
    ) -> Result<bool, TypoError> {
        Ok(self.speller()?.has_flag(word, flag, codes))
    }

    /// Number of distinct word forms in the dictionary.
    pub fn word_count(&self) -> Result<usize, TypoError> {
        Ok(self.loaded()?.dictionary.table().len())
    }

    /// Number of prefix and suffix rules.
    pub fn rule_count(&self) -> Result<usize, TypoError> {
        Ok(self.loaded()?.dictionary.affixes().rules.len())
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Generate up to `max_suggestions` corrections for a misspelled word,
    /// best first.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, TypoError> {
        self.suggest_with_limit(word, self.options.max_suggestions)
    }

    /// Generate up to `limit` corrections for a misspelled word.
    ///
    /// - A replacement-table correction that checks is returned alone.
    /// - A word that already checks gets no suggestions.
    /// - Otherwise candidates up to `max_edit_distance` edits away are
    ///   ranked by distance, then alphabetically.
    ///
    /// The search expands every candidate of every level, so its cost
    /// grows with word length times alphabet size, squared at the default
    /// distance of 2. A long word with no close dictionary entries is the
    /// worst case (several seconds for 16 characters in a debug build);
    /// lower the distance with [`set_max_edit_distance`](Self::set_max_edit_distance)
    /// when that matters.
    pub fn suggest_with_limit(&self, word: &str, limit: usize) -> Result<Vec<String>, TypoError> {
        let loaded = self.loaded()?;
        if limit == 0 {
            return Ok(Vec::new());
        }
        if let Some(cached) = self.lock_cache().get(word, limit) {
            return Ok(cached);
        }

        let speller = DictionarySpeller::new(&loaded.dictionary);
        if let Some(corrected) =
            replacement_suggestion(&speller, word, loaded.dictionary.replacements())
        {
            return Ok(vec![corrected]);
        }
        if speller.check(word) {
            return Ok(Vec::new());
        }

        let alphabet: Cow<'_, [char]> = match &self.options.alphabet {
            Some(chars) => Cow::Owned(custom_alphabet(chars)),
            None => Cow::Borrowed(loaded.alphabet.as_slice()),
        };
        let mut status =
            SuggestionStatus::new(word, self.options.max_edit_distance, self.options.metric);
        self.shared
            .strategy
            .generate(&speller, &mut status, &alphabet);
        status.sort_suggestions();

        let results: Vec<String> = status.into_suggestions().into_iter().map(|s| s.word).collect();
        let truncated = results.iter().take(limit).cloned().collect();
        self.lock_cache().insert(word, limit, results);
        Ok(truncated)
    }

    fn lock_cache(&self) -> MutexGuard<'_, SuggestionCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn clear_cache(&mut self) {
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    /// Set the number of suggestions returned by [`suggest`](Self::suggest).
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = value;
    }

    /// Set the search depth and score cut-off of the suggestion search.
    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.options.max_edit_distance = value;
        self.clear_cache();
    }

    /// Set how suggestion candidates are scored.
    pub fn set_distance_metric(&mut self, metric: DistanceMetric) {
        self.options.metric = metric;
        self.clear_cache();
    }

    /// Override the suggestion alphabet, or restore the dictionary default
    /// with `None`.
    pub fn set_alphabet(&mut self, alphabet: Option<String>) {
        self.options.alphabet = alphabet;
        self.clear_cache();
    }

    /// Resize the suggestion memo to `256 << size_param` slots, dropping
    /// its contents. `size_param` is capped at [`MAX_SIZE_PARAM`].
    pub fn set_memo_cache_size(&mut self, size_param: u32) {
        let size_param = size_param.min(MAX_SIZE_PARAM);
        self.memo_cache_size = size_param;
        self.cache = Mutex::new(SuggestionCache::new(size_param));
    }
}

impl Clone for Typo {
    /// Clones share the dictionary; each clone has its own empty memo.
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            options: self.options.clone(),
            memo_cache_size: self.memo_cache_size,
            cache: Mutex::new(SuggestionCache::new(self.memo_cache_size)),
        }
    }
}

impl fmt::Debug for Typo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typo")
            .field("name", &self.shared.name)
            .field("loaded", &self.is_loaded())
            .field("options", &self.options)
            .finish()
    }
}
