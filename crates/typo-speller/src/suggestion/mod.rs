// Suggestion generation module
//
// Produces spelling correction candidates for misspelled words: first a
// replacement-table pass, then a breadth-first search over single
// character edits validated through the speller.
//
// Architecture:
//   - `generators`: individual edit-operation generators (EditGenerator trait)
//   - `status`: seen set, length band and scored results of one search
//   - `strategy`: replacement pass and the level-by-level search
//   - `distance`: edit distances used as scores
//   - `cache`: bounded memo of finished searches

pub mod cache;
pub mod distance;
pub mod generators;
pub mod status;
pub mod strategy;

pub use cache::SuggestionCache;
pub use distance::DistanceMetric;
pub use generators::EditGenerator;
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, default_strategy, replacement_suggestion};
