// Word list (.dic) parsing and expansion into the full form table

use hashbrown::HashMap;
use typo_core::enums::{NEEDAFFIX, ONLYINCOMPOUND};
use typo_core::flag::parse_rule_codes;

use crate::AffixError;
use crate::affix::{AffixData, ReplacementPair, strip_bom};
use crate::compound::{CompoundRules, referenced_codes};
use crate::table::DictionaryTable;

/// A fully built dictionary: the parsed affix data, every generated word
/// form, and the compiled compound rules.
///
/// Built once from the two source texts and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    affixes: AffixData,
    table: DictionaryTable,
    compound: CompoundRules,
}

impl Dictionary {
    /// Parse the affix text, then build the dictionary from the word list.
    pub fn build(
        aff_text: &str,
        dic_text: &str,
        seed_flags: &HashMap<String, String>,
    ) -> Result<Self, AffixError> {
        let affixes = AffixData::parse(aff_text, seed_flags)?;
        Self::from_affixes(affixes, dic_text)
    }

    /// Expand a word list against already parsed affix data.
    ///
    /// The first line of the word list is the declared word count and is
    /// skipped unread. Lines starting with a tab are comments.
    pub fn from_affixes(affixes: AffixData, dic_text: &str) -> Result<Self, AffixError> {
        let mode = affixes.flag_mode();

        let mut compound_words: HashMap<String, Vec<String>> =
            referenced_codes(&affixes.compound_rules, mode)
                .into_iter()
                .map(|code| (code, Vec::new()))
                .collect();
        // Tracked so that compound-only words are known per code.
        if let Some(code) = affixes.flag(ONLYINCOMPOUND) {
            compound_words.entry(code.to_string()).or_default();
        }
        let need_affix = affixes.flag(NEEDAFFIX);

        let mut table = DictionaryTable::new();

        for line in strip_bom(dic_text).lines().skip(1) {
            if line.starts_with('\t') {
                continue;
            }
            let (word, codes_text) = split_entry(line);
            if word.is_empty() {
                continue;
            }
            let Some(codes_text) = codes_text else {
                table.add_word(word, &[]);
                continue;
            };

            let codes = parse_rule_codes(codes_text, mode);
            if !need_affix.is_some_and(|flag| codes.iter().any(|c| c == flag)) {
                table.add_word(word, &codes);
            }

            for (j, code) in codes.iter().enumerate() {
                if let Some(rule) = affixes.rule(code) {
                    for new_word in affixes.apply_rule(word, code, rule) {
                        table.add_word(&new_word, &[]);
                        if !rule.combineable {
                            continue;
                        }
                        for other_code in &codes[j + 1..] {
                            let Some(other) = affixes.rule(other_code) else {
                                continue;
                            };
                            if other.combineable && other.kind != rule.kind {
                                for combined in affixes.apply_rule(&new_word, other_code, other) {
                                    table.add_word(&combined, &[]);
                                }
                            }
                        }
                    }
                }

                if let Some(words) = compound_words.get_mut(code.as_str()) {
                    words.push(word.to_string());
                }
            }
        }

        let compound = CompoundRules::compile(&affixes.compound_rules, mode, compound_words)?;

        Ok(Self {
            affixes,
            table,
            compound,
        })
    }

    pub fn affixes(&self) -> &AffixData {
        &self.affixes
    }

    pub fn table(&self) -> &DictionaryTable {
        &self.table
    }

    pub fn compound_rules(&self) -> &CompoundRules {
        &self.compound
    }

    /// Value declared for a flag name, if any.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.affixes.flag(name)
    }

    pub fn replacements(&self) -> &[ReplacementPair] {
        &self.affixes.replacements
    }
}

/// Split a word-list line into the word and its rule-code text.
///
/// Tab-separated and whitespace-separated morphological fields after the
/// codes are dropped. Text after a second `/` is ignored.
fn split_entry(line: &str) -> (&str, Option<&str>) {
    let entry = line.split('\t').next().unwrap_or_default();
    let mut parts = entry.split('/');
    let word = parts.next().unwrap_or_default().trim();
    let codes = parts
        .next()
        .map(|text| text.split_whitespace().next().unwrap_or_default());
    (word, codes)
}
