// Prefix/suffix rule application with continuation chains

use typo_core::enums::AffixKind;

use crate::affix::{AffixData, AffixEntry, AffixRule};

/// Maximum number of rules applied in one continuation chain, counting
/// the rule that started it.
pub const MAX_CHAIN_DEPTH: usize = 8;

impl AffixEntry {
    /// Apply this entry to `word`, or `None` if its condition rejects it.
    ///
    /// The strip text is removed only when the word actually starts
    /// (prefix) or ends (suffix) with it.
    pub fn apply(&self, kind: AffixKind, word: &str) -> Option<String> {
        if self.condition.as_ref().is_some_and(|c| !c.is_match(word)) {
            return None;
        }

        let stripped = match (&self.strip, kind) {
            (None, _) => word,
            (Some(strip), AffixKind::Suffix) => word.strip_suffix(strip.as_str()).unwrap_or(word),
            (Some(strip), AffixKind::Prefix) => word.strip_prefix(strip.as_str()).unwrap_or(word),
        };

        let mut out = String::with_capacity(stripped.len() + self.add.len());
        match kind {
            AffixKind::Suffix => {
                out.push_str(stripped);
                out.push_str(&self.add);
            }
            AffixKind::Prefix => {
                out.push_str(&self.add);
                out.push_str(stripped);
            }
        }
        Some(out)
    }
}

impl AffixData {
    /// Generate every form `rule` (identified by `code`) produces from
    /// `word`, following continuation codes recursively.
    ///
    /// A continuation code already applied earlier in the same chain is
    /// skipped, and chains stop growing at [`MAX_CHAIN_DEPTH`] rules.
    pub fn apply_rule<'a>(&'a self, word: &str, code: &'a str, rule: &'a AffixRule) -> Vec<String> {
        let mut forms = Vec::new();
        let mut chain = vec![code];
        self.apply_chained(word, rule, &mut chain, &mut forms);
        forms
    }

    fn apply_chained<'a>(
        &'a self,
        word: &str,
        rule: &'a AffixRule,
        chain: &mut Vec<&'a str>,
        forms: &mut Vec<String>,
    ) {
        for entry in &rule.entries {
            let Some(new_word) = entry.apply(rule.kind, word) else {
                continue;
            };
            forms.push(new_word.clone());

            for code in &entry.continuation {
                let Some(next) = self.rules.get(code) else {
                    continue;
                };
                if chain.contains(&code.as_str()) || chain.len() >= MAX_CHAIN_DEPTH {
                    log::debug!("skipping continuation {code} of {new_word}: chain {chain:?}");
                    continue;
                }
                chain.push(code.as_str());
                self.apply_chained(&new_word, next, chain, forms);
                chain.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;

    fn parse(text: &str) -> AffixData {
        AffixData::parse(text, &HashMap::new()).unwrap()
    }

    fn apply(data: &AffixData, word: &str, code: &str) -> Vec<String> {
        let rule = data.rule(code).unwrap();
        let mut forms = data.apply_rule(word, code, rule);
        forms.sort();
        forms
    }

    #[test]
    fn suffix_with_condition() {
        let data = parse("SFX S Y 2\nSFX S y ies [^aeiou]y\nSFX S 0 s [^y]\n");
        assert_eq!(apply(&data, "fly", "S"), vec!["flies"]);
        assert_eq!(apply(&data, "cat", "S"), vec!["cats"]);
    }

    #[test]
    fn unmatched_condition_contributes_nothing() {
        let data = parse("SFX S Y 1\nSFX S y ies [^aeiou]y\n");
        assert!(apply(&data, "cat", "S").is_empty());
    }

    #[test]
    fn prefix_strips_from_start() {
        let data = parse("PFX X N 1\nPFX X e a e\n");
        assert_eq!(apply(&data, "exit", "X"), vec!["axit"]);
    }

    #[test]
    fn strip_that_does_not_occur_keeps_word() {
        let entry = AffixEntry {
            strip: Some("y".into()),
            add: "s".into(),
            condition: None,
            continuation: Vec::new(),
        };
        assert_eq!(entry.apply(AffixKind::Suffix, "cat").as_deref(), Some("cats"));
    }

    #[test]
    fn continuation_chain_adds_further_forms() {
        let data = parse(
            "SFX A Y 1\nSFX A 0 able/S .\n\
             SFX S Y 1\nSFX S 0 s .\n",
        );
        assert_eq!(apply(&data, "read", "A"), vec!["readable", "readables"]);
    }

    #[test]
    fn unknown_continuation_code_is_ignored() {
        let data = parse("SFX A Y 1\nSFX A 0 er/Z .\n");
        assert_eq!(apply(&data, "walk", "A"), vec!["walker"]);
    }

    #[test]
    fn self_referencing_rule_terminates() {
        let data = parse("SFX L Y 1\nSFX L 0 la/L .\n");
        assert_eq!(apply(&data, "tra", "L"), vec!["trala"]);
    }

    #[test]
    fn mutual_cycle_terminates() {
        let data = parse(
            "SFX A Y 1\nSFX A 0 a/B .\n\
             SFX B Y 1\nSFX B 0 b/A .\n",
        );
        assert_eq!(apply(&data, "x", "A"), vec!["xa", "xab"]);
    }

    #[test]
    fn chain_depth_is_capped() {
        // R0 -> R1 -> ... -> R9, each adding one letter.
        let mut text = String::new();
        for i in 0..10 {
            let next = if i < 9 { format!("/{}", i + 1) } else { String::new() };
            text.push_str(&format!("SFX {i} Y 1\nSFX {i} 0 x{next} .\n"));
        }
        let data = parse(&text);
        let forms = apply(&data, "w", "0");
        assert_eq!(forms.len(), MAX_CHAIN_DEPTH);
        assert!(forms.iter().all(|f| f.len() <= 1 + MAX_CHAIN_DEPTH));
    }
}
