// Word lookups against a built dictionary: exact match, case variants,
// per-occurrence flag tests and compound-rule matching

use typo_aff::{Dictionary, Lookup};
use typo_core::case::{capitalize, is_all_upper, uncapitalize};
use typo_core::enums::{COMPOUNDMIN, KEEPCASE, ONLYINCOMPOUND};

use super::Speller;

/// Lightweight lookup view over a [`Dictionary`].
///
/// Created on the fly by the handle for each call; it borrows the
/// dictionary and holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct DictionarySpeller<'a> {
    dict: &'a Dictionary,
}

impl<'a> DictionarySpeller<'a> {
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }

    /// Look `word` up exactly as written.
    ///
    /// - Absent forms are tried against the compound rules when `COMPOUNDMIN`
    ///   is declared and the word is long enough.
    /// - Forms without rule codes are accepted.
    /// - Forms with rule codes are accepted if at least one occurrence is
    ///   not compound-only.
    pub fn check_exact(&self, word: &str) -> bool {
        match self.dict.table().lookup(word) {
            Lookup::Absent => self.matches_compound(word),
            Lookup::Bare => true,
            Lookup::Flagged(occurrences) => occurrences
                .iter()
                .any(|codes| !self.has_flag(word, ONLYINCOMPOUND, Some(codes.as_slice()))),
        }
    }

    /// Check `word` allowing the case variants a writer would expect.
    ///
    /// The word is trimmed first. All-uppercase input may match its
    /// capitalized or lowercase form; any input may match with its first
    /// letter lowercased. A form carrying `KEEPCASE` vetoes the variant
    /// lookups and the whole check fails.
    pub fn check(&self, word: &str) -> bool {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.check_exact(trimmed) {
            return true;
        }

        if is_all_upper(trimmed) {
            let capitalized = capitalize(trimmed);
            if self.has_flag(&capitalized, KEEPCASE, None) {
                return false;
            }
            if self.check_exact(&capitalized) {
                return true;
            }
            if self.check_exact(&trimmed.to_lowercase()) {
                return true;
            }
        }

        let uncapitalized = uncapitalize(trimmed);
        if uncapitalized != trimmed {
            if self.has_flag(&uncapitalized, KEEPCASE, None) {
                return false;
            }
            if self.check_exact(&uncapitalized) {
                return true;
            }
        }

        false
    }

    /// Whether `word` carries the code assigned to the global flag `flag`.
    ///
    /// `codes` replaces the word's own (flattened) rule codes when given.
    /// A flag that is not declared, or declared without a value, is never
    /// carried.
    pub fn has_flag(&self, word: &str, flag: &str, codes: Option<&[String]>) -> bool {
        let Some(value) = self.dict.flag(flag).filter(|v| !v.is_empty()) else {
            return false;
        };
        match codes {
            Some(codes) => codes.iter().any(|c| c == value),
            None => self.dict.table().rule_codes(word).any(|c| c == value),
        }
    }

    fn matches_compound(&self, word: &str) -> bool {
        let Some(min) = self.dict.flag(COMPOUNDMIN).and_then(|v| v.parse::<usize>().ok()) else {
            return false;
        };
        word.chars().count() >= min && self.dict.compound_rules().is_match(word)
    }
}

impl Speller for DictionarySpeller<'_> {
    fn check(&self, word: &str) -> bool {
        DictionarySpeller::check(self, word)
    }
}
