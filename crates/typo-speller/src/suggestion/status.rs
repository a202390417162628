// Suggestion status tracking: seen candidates, length band, scored results

use hashbrown::HashSet;

use super::distance::DistanceMetric;

/// A suggestion candidate with its edit-distance score.
///
/// Lower scores indicate better suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Distance from the misspelled word.
    pub score: usize,
}

/// Tracks the state of one suggestion search: which candidates have been
/// visited and which were accepted.
pub struct SuggestionStatus<'a> {
    /// The misspelled word.
    word: &'a str,
    /// Candidates further than this from `word` are not recorded, and
    /// candidate lengths must stay within this many characters of it.
    max_distance: usize,
    metric: DistanceMetric,
    min_len: usize,
    max_len: usize,
    suggestions: Vec<Suggestion>,
    /// Every candidate generated so far, accepted or not.
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a str, max_distance: usize, metric: DistanceMetric) -> Self {
        let len = word.chars().count();
        let mut seen = HashSet::new();
        seen.insert(word.to_string());
        Self {
            word,
            max_distance,
            metric,
            min_len: len.saturating_sub(max_distance),
            max_len: len + max_distance,
            suggestions: Vec::new(),
            seen,
        }
    }

    /// Record `candidate` as visited. Returns `false` if it was seen before.
    pub fn mark_seen(&mut self, candidate: &str) -> bool {
        if self.seen.contains(candidate) {
            return false;
        }
        self.seen.insert(candidate.to_string());
        true
    }

    /// Whether `candidate` is close enough in length to be considered.
    pub fn in_length_band(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        (self.min_len..=self.max_len).contains(&len)
    }

    /// Score a valid candidate and keep it if it is within the maximum
    /// distance.
    pub fn add_suggestion(&mut self, candidate: &str) {
        let score = self.metric.distance(self.word, candidate);
        if score > self.max_distance {
            log::debug!("dropping {candidate:?}: distance {score} from {:?}", self.word);
            return;
        }
        self.suggestions.push(Suggestion {
            word: candidate.to_string(),
            score,
        });
    }

    /// Sort suggestions by score, then alphabetically.
    pub fn sort_suggestions(&mut self) {
        self.suggestions
            .sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// The word suggestions are generated for.
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Number of edit levels the search may explore.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }
}
