// Suggestion strategy: replacement-table pass and breadth-first edit search

use typo_aff::ReplacementPair;

use super::generators::{Deletion, EditGenerator, Insertion, Substitution, Transposition};
use super::status::SuggestionStatus;
use crate::speller::Speller;

/// Try each replacement pair in order, substituting its first occurrence
/// in `word`. The first result the speller accepts is returned.
pub fn replacement_suggestion(
    speller: &dyn Speller,
    word: &str,
    replacements: &[ReplacementPair],
) -> Option<String> {
    replacements
        .iter()
        .filter(|pair| !pair.from.is_empty() && word.contains(pair.from.as_str()))
        .map(|pair| word.replacen(pair.from.as_str(), &pair.to, 1))
        .find(|corrected| speller.check(corrected))
}

/// A suggestion strategy holds the edit generators that produce each
/// level of the search.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn EditGenerator + Send + Sync>>,
}

impl SuggestionStrategy {
    pub fn new(generators: Vec<Box<dyn EditGenerator + Send + Sync>>) -> Self {
        Self { generators }
    }

    /// Run a breadth-first search from the word tracked by `status`.
    ///
    /// Level `d` expands every candidate of level `d - 1` by one edit;
    /// `status.max_distance()` levels are explored. Every unseen candidate
    /// within the length band is checked and carried to the next level,
    /// whether the speller accepts it or not.
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>, alphabet: &[char]) {
        let mut current = vec![status.word().to_string()];
        let mut edits = Vec::new();

        for level in 0..status.max_distance() {
            let mut next = Vec::new();

            for candidate in &current {
                let chars: Vec<char> = candidate.chars().collect();
                for generator in &self.generators {
                    generator.generate(&chars, alphabet, &mut edits);
                }

                for edit in edits.drain(..) {
                    if !status.mark_seen(&edit) || !status.in_length_band(&edit) {
                        continue;
                    }
                    if speller.check(&edit) {
                        status.add_suggestion(&edit);
                    }
                    next.push(edit);
                }
            }

            log::debug!(
                "level {level}: {} candidates, {} suggestions so far",
                next.len(),
                status.suggestion_count()
            );
            current = next;
        }
    }
}

/// Deletion, transposition, substitution and insertion, in that order.
pub fn default_strategy() -> SuggestionStrategy {
    let generators: Vec<Box<dyn EditGenerator + Send + Sync>> = vec![
        Box::new(Deletion),
        Box::new(Transposition),
        Box::new(Substitution),
        Box::new(Insertion),
    ];
    SuggestionStrategy::new(generators)
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        default_strategy()
    }
}
