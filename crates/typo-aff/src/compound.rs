// Compound rules: tokenization into rule codes and pattern compilation
//
// Compilation is two-pass. First every code referenced by any compound
// rule is collected (see `referenced_codes`); the dictionary builder then
// records which base words carry each code; finally each rule is compiled
// with every code replaced by an alternation of its words.

use hashbrown::{HashMap, HashSet};
use regex::{Regex, RegexBuilder};
use typo_core::flag::FlagMode;

use crate::AffixError;

/// Characters that act as pattern operators rather than rule codes.
const OPERATORS: &[char] = &['*', '?', '+', '(', ')'];

/// Pattern fragment for a code no word carries.
const NEVER_MATCHES: &str = r"[^\s\S]";

/// Compiled patterns are far larger than typical regexes because every
/// code expands to a list of words.
const PATTERN_SIZE_LIMIT: usize = 64 << 20;

/// One element of a compound rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleToken {
    /// A rule code standing for any word that carries it.
    Code(String),
    /// A quantifier or grouping character copied into the pattern.
    Operator(char),
}

/// Split a compound rule into codes and operators.
///
/// Multi-character flag modes write codes in parentheses, e.g.
/// `(aa)(bb)*`; single-character modes use one character per code.
pub fn tokenize(rule: &str, mode: FlagMode) -> Vec<RuleToken> {
    let mut tokens = Vec::new();
    let mut chars = rule.chars();

    while let Some(c) = chars.next() {
        if mode.is_multi_char() && c == '(' {
            let mut code = String::new();
            let mut closed = false;
            for inner in chars.by_ref() {
                if inner == ')' {
                    closed = true;
                    break;
                }
                code.push(inner);
            }
            if closed && !code.is_empty() {
                tokens.push(RuleToken::Code(code));
            } else {
                tokens.push(RuleToken::Operator('('));
                tokens.extend(code.chars().map(|c| RuleToken::Code(c.to_string())));
            }
        } else if OPERATORS.contains(&c) {
            tokens.push(RuleToken::Operator(c));
        } else {
            tokens.push(RuleToken::Code(c.to_string()));
        }
    }

    tokens
}

/// Every code referenced by the given compound rules.
pub fn referenced_codes(rules: &[String], mode: FlagMode) -> HashSet<String> {
    rules
        .iter()
        .flat_map(|rule| tokenize(rule, mode))
        .filter_map(|token| match token {
            RuleToken::Code(code) => Some(code),
            RuleToken::Operator(_) => None,
        })
        .collect()
}

/// Compiled compound-rule patterns plus the words collected per code.
#[derive(Debug, Clone, Default)]
pub struct CompoundRules {
    patterns: Vec<Regex>,
    words_by_code: HashMap<String, Vec<String>>,
}

impl CompoundRules {
    /// Compile `rules` against the words collected for each code.
    ///
    /// Codes without words are dropped from the map; in a pattern they
    /// become a fragment that never matches. Patterns are anchored at
    /// both ends and case-insensitive.
    pub fn compile(
        rules: &[String],
        mode: FlagMode,
        mut words_by_code: HashMap<String, Vec<String>>,
    ) -> Result<Self, AffixError> {
        words_by_code.retain(|code, words| {
            if words.is_empty() {
                log::debug!("compound rule code {code:?} has no words");
            }
            !words.is_empty()
        });

        let mut patterns = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut body = String::new();
            for token in tokenize(rule, mode) {
                match token {
                    RuleToken::Operator(c) => body.push(c),
                    RuleToken::Code(code) => match words_by_code.get(&code) {
                        Some(words) => {
                            body.push_str("(?:");
                            for (i, word) in words.iter().enumerate() {
                                if i > 0 {
                                    body.push('|');
                                }
                                body.push_str(&regex::escape(word));
                            }
                            body.push(')');
                        }
                        None => body.push_str(NEVER_MATCHES),
                    },
                }
            }

            let pattern = RegexBuilder::new(&format!("^(?:{body})$"))
                .case_insensitive(true)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
                .map_err(|source| AffixError::InvalidCompoundRule {
                    rule: rule.clone(),
                    source,
                })?;
            patterns.push(pattern);
        }

        Ok(Self {
            patterns,
            words_by_code,
        })
    }

    /// Whether `word` is an instance of any compound rule.
    pub fn is_match(&self, word: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(word))
    }

    /// Base words carrying `code`, if the code is tracked.
    pub fn words_for(&self, code: &str) -> Option<&[String]> {
        self.words_by_code.get(code).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
