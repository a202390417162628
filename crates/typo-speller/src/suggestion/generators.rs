// One-edit neighbour generators used by the suggestion search.
//
// Each generator applies one class of single-character edit to a word
// and appends every resulting string to an output buffer. Candidates are
// validated by the caller; generators know nothing about the dictionary.

/// Letters every alphabet starts from.
const BASE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual edit generators.
pub trait EditGenerator {
    /// Append every one-edit variant of `word` to `out`.
    ///
    /// `alphabet` is the set of characters available to edits that
    /// introduce a character.
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>);
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Remove one character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deletion;

impl EditGenerator for Deletion {
    fn generate(&self, word: &[char], _alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..word.len() {
            out.push(word[..i].iter().chain(&word[i + 1..]).collect());
        }
    }
}

/// Swap two adjacent characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transposition;

impl EditGenerator for Transposition {
    fn generate(&self, word: &[char], _alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..word.len().saturating_sub(1) {
            let mut buffer = word.to_vec();
            buffer.swap(i, i + 1);
            out.push(buffer.into_iter().collect());
        }
    }
}

/// Replace one character with each alphabet character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitution;

impl EditGenerator for Substitution {
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>) {
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            for &c in alphabet {
                buffer[i] = c;
                out.push(buffer.iter().collect());
            }
            buffer[i] = word[i];
        }
    }
}

/// Insert each alphabet character at each position, including the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insertion;

impl EditGenerator for Insertion {
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..=word.len() {
            for &c in alphabet {
                let mut s = String::with_capacity(word.len() + 1);
                s.extend(&word[..i]);
                s.push(c);
                s.extend(&word[i..]);
                out.push(s);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// Build the suggestion alphabet: `a`-`z` plus every character of the
/// given extra sets (typically the `TRY` and `WORDCHARS` affix flags),
/// sorted and without duplicates.
pub fn build_alphabet<'a>(extra: impl IntoIterator<Item = &'a str>) -> Vec<char> {
    let mut alphabet: Vec<char> = BASE_ALPHABET.chars().collect();
    for set in extra {
        alphabet.extend(set.chars().filter(|c| !c.is_whitespace()));
    }
    alphabet.sort_unstable();
    alphabet.dedup();
    alphabet
}

/// An alphabet given verbatim, sorted and without duplicates.
pub fn custom_alphabet(chars: &str) -> Vec<char> {
    let mut alphabet: Vec<char> = chars.chars().collect();
    alphabet.sort_unstable();
    alphabet.dedup();
    alphabet
}
