// Word-form table: surface string -> how the form entered the dictionary

use hashbrown::HashMap;

/// A known word form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntry {
    /// Listed or generated without any rule codes.
    Bare,
    /// One rule-code list per listing that carried codes. Several
    /// listings of the same word each keep their own list.
    Flagged(Vec<Vec<String>>),
}

/// Result of looking a word up in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The form is not in the table.
    Absent,
    /// The form exists with no rule codes.
    Bare,
    /// The form exists with these rule-code lists.
    Flagged(&'a [Vec<String>]),
}

/// Mapping from every accepted surface form to its entry.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTable {
    words: HashMap<String, WordEntry>,
}

impl DictionaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word form.
    ///
    /// A new word starts as `Bare`. A non-empty code list is appended to
    /// whatever the word already has, so repeated listings never erase
    /// earlier information.
    pub fn add_word(&mut self, word: &str, codes: &[String]) {
        let entry = self.words.entry_ref(word).or_insert(WordEntry::Bare);
        if codes.is_empty() {
            return;
        }
        match entry {
            WordEntry::Bare => *entry = WordEntry::Flagged(vec![codes.to_vec()]),
            WordEntry::Flagged(lists) => lists.push(codes.to_vec()),
        }
    }

    pub fn lookup(&self, word: &str) -> Lookup<'_> {
        match self.words.get(word) {
            None => Lookup::Absent,
            Some(WordEntry::Bare) => Lookup::Bare,
            Some(WordEntry::Flagged(lists)) => Lookup::Flagged(lists),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// All rule codes of a word across its listings, in listing order.
    pub fn rule_codes(&self, word: &str) -> impl Iterator<Item = &str> + '_ {
        let lists: &[Vec<String>] = match self.words.get(word) {
            Some(WordEntry::Flagged(lists)) => lists,
            _ => &[],
        };
        lists.iter().flatten().map(String::as_str)
    }

    /// Number of distinct word forms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all word forms in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(String::as_str)
    }
}
