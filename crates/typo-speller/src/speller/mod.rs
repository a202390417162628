// Spell checking module

pub mod lookup;

pub use lookup::DictionarySpeller;

/// Trait for spell checkers.
///
/// Suggestion generation only needs a yes/no answer for each candidate,
/// so this is the seam between the lookup engine and the suggestion
/// search.
pub trait Speller {
    /// Check whether the given word is correct, allowing the usual case
    /// variants.
    fn check(&self, word: &str) -> bool;
}
