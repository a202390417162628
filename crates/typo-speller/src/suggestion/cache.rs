// Hash-based suggestion memo cache

/// Slot count at size parameter 0.
const BASE_SLOTS: usize = 256;

/// Hash order (log2 of the slot count) at size parameter 0.
const BASE_ORDER: u32 = 8;

/// Largest accepted size parameter (65536 slots). Larger values are clamped.
pub const MAX_SIZE_PARAM: u32 = 8;

/// Simple string hash reduced to `order` bits.
fn typo_hash(word: &str, order: u32) -> usize {
    let modulus = 1u64 << order;
    let mut hash: u64 = 0;
    for ch in word.chars() {
        hash = (hash.wrapping_mul(37).wrapping_add(u64::from(ch))) % modulus;
    }
    hash as usize
}

#[derive(Debug, Clone)]
struct CachedSuggestions {
    word: String,
    /// The limit the results were requested with.
    limit: usize,
    /// Full sorted result list of the search.
    results: Vec<String>,
}

/// A fixed-size, direct-mapped cache of suggestion results.
///
/// Each word hashes to exactly one slot; an insert into an occupied slot
/// overwrites it (no chaining or LRU).
#[derive(Debug, Clone)]
pub struct SuggestionCache {
    size_param: u32,
    slots: Vec<Option<CachedSuggestions>>,
}

impl SuggestionCache {
    /// Create a new cache with the given size parameter.
    ///
    /// The cache holds `256 << size_param` slots; `size_param` is capped
    /// at [`MAX_SIZE_PARAM`].
    pub fn new(size_param: u32) -> Self {
        let size_param = size_param.min(MAX_SIZE_PARAM);
        Self {
            size_param,
            slots: vec![None; BASE_SLOTS << size_param],
        }
    }

    fn slot(&self, word: &str) -> usize {
        typo_hash(word, BASE_ORDER + self.size_param)
    }

    /// Cached suggestions for `word`, truncated to `limit`.
    ///
    /// Only answers when the cached search was run with a limit at least
    /// as large as `limit`.
    pub fn get(&self, word: &str, limit: usize) -> Option<Vec<String>> {
        let entry = self.slots[self.slot(word)].as_ref()?;
        if entry.word != word || entry.limit < limit {
            return None;
        }
        log::debug!("suggestion cache hit for {word:?} (limit {limit})");
        Some(entry.results.iter().take(limit).cloned().collect())
    }

    /// Store the full sorted results of a search for `word`.
    pub fn insert(&mut self, word: &str, limit: usize, results: Vec<String>) {
        let slot = self.slot(word);
        self.slots[slot] = Some(CachedSuggestions {
            word: word.to_string(),
            limit,
            results,
        });
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(0)
    }
}
