// Affix file (.aff) parsing
//
// The parser is a pure function of the text (plus an optional seed flag
// map): it scans the lines once and returns an immutable `AffixData`.
// Block directives (PFX/SFX/COMPOUNDRULE) consume their declared number
// of sub-lines, which are never re-read as directives.

use hashbrown::HashMap;
use regex::Regex;
use typo_core::enums::{AffixKind, FLAG};
use typo_core::flag::{FlagMode, parse_rule_codes};

use crate::AffixError;

/// One line of a PFX/SFX block.
#[derive(Debug, Clone)]
pub struct AffixEntry {
    /// Literal text stripped from the word before `add` is attached.
    pub strip: Option<String>,
    /// Text attached at the start (PFX) or end (SFX).
    pub add: String,
    /// Condition the word must satisfy, anchored at the relevant end.
    /// `None` means the entry always applies.
    pub condition: Option<Regex>,
    /// Rule codes applied to the produced word in turn.
    pub continuation: Vec<String>,
}

/// A prefix or suffix rule identified by its code.
#[derive(Debug, Clone)]
pub struct AffixRule {
    pub kind: AffixKind,
    /// Whether the rule may stack with a combineable rule of the other kind.
    pub combineable: bool,
    pub entries: Vec<AffixEntry>,
}

/// A `REP from to` pair used as the first suggestion heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub from: String,
    pub to: String,
}

/// Everything parsed from an affix file.
#[derive(Debug, Clone, Default)]
pub struct AffixData {
    pub rules: HashMap<String, AffixRule>,
    /// Raw compound rule patterns, in declaration order.
    pub compound_rules: Vec<String>,
    pub replacements: Vec<ReplacementPair>,
    /// Every other directive, `name -> first argument`.
    pub flags: HashMap<String, String>,
}

impl AffixData {
    /// Parse affix-file text.
    ///
    /// `seed_flags` pre-populates the flag map; declarations in the file
    /// replace seeded values with the same name.
    pub fn parse(text: &str, seed_flags: &HashMap<String, String>) -> Result<Self, AffixError> {
        let mut data = AffixData {
            flags: seed_flags.clone(),
            ..Default::default()
        };

        let lines: Vec<&str> = strip_bom(text).lines().collect();
        let mut i = 0;

        while i < lines.len() {
            let line_no = i + 1;
            let line = lines[i];
            i += 1;

            if is_comment(line) {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            let Some(&directive) = parts.first() else {
                continue;
            };

            if let Some(kind) = AffixKind::from_directive(directive) {
                let code = field(&parts, 1, line_no, directive)?;
                let combineable = field(&parts, 2, line_no, directive)? == "Y";
                let count = entry_count(&parts, 3, line_no, directive)?;
                let block = block_lines(&lines, i, count, directive)?;

                let mode = data.flag_mode();
                let entries = block
                    .iter()
                    .enumerate()
                    .map(|(offset, sub)| parse_entry(sub, kind, mode, line_no + 1 + offset))
                    .collect::<Result<Vec<_>, _>>()?;

                data.rules.insert(
                    code.to_string(),
                    AffixRule {
                        kind,
                        combineable,
                        entries,
                    },
                );
                i += count;
            } else if directive == "COMPOUNDRULE" {
                let count = entry_count(&parts, 1, line_no, directive)?;
                let block = block_lines(&lines, i, count, directive)?;
                for (offset, sub) in block.iter().enumerate() {
                    let sub_parts: Vec<&str> = sub.split_whitespace().collect();
                    let rule = field(&sub_parts, 1, line_no + 1 + offset, directive)?;
                    data.compound_rules.push(rule.to_string());
                }
                i += count;
            } else if directive == "REP" {
                // The `REP <count>` header has two fields and is skipped.
                if let [_, from, to] = parts.as_slice() {
                    data.replacements.push(ReplacementPair {
                        from: (*from).to_string(),
                        to: (*to).to_string(),
                    });
                }
            } else {
                let value = parts.get(1).copied().unwrap_or_default();
                data.flags.insert(directive.to_string(), value.to_string());
            }
        }

        log::debug!(
            "parsed affix data: {} rules, {} compound rules, {} replacements, {} flags",
            data.rules.len(),
            data.compound_rules.len(),
            data.replacements.len(),
            data.flags.len()
        );

        Ok(data)
    }

    /// The rule-code encoding selected by the `FLAG` directive.
    pub fn flag_mode(&self) -> FlagMode {
        FlagMode::from_flag_value(self.flags.get(FLAG).map(String::as_str))
    }

    /// Value declared for a flag name, if any.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Look up a rule by code.
    pub fn rule(&self, code: &str) -> Option<&AffixRule> {
        self.rules.get(code)
    }
}

/// Drop a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Only lines whose first non-blank character is `#` are comments;
/// compound rules may contain `#` further along the line.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn field<'a>(
    parts: &[&'a str],
    index: usize,
    line: usize,
    directive: &str,
) -> Result<&'a str, AffixError> {
    parts
        .get(index)
        .copied()
        .ok_or_else(|| AffixError::MissingField {
            line,
            directive: directive.to_string(),
        })
}

fn entry_count(
    parts: &[&str],
    index: usize,
    line: usize,
    directive: &str,
) -> Result<usize, AffixError> {
    let value = field(parts, index, line, directive)?;
    value.parse().map_err(|_| AffixError::InvalidCount {
        line,
        directive: directive.to_string(),
        value: value.to_string(),
    })
}

fn block_lines<'a>(
    lines: &'a [&'a str],
    start: usize,
    count: usize,
    directive: &str,
) -> Result<&'a [&'a str], AffixError> {
    let available = lines.len().saturating_sub(start);
    if available < count {
        return Err(AffixError::Truncated {
            directive: directive.to_string(),
            expected: count,
            found: available,
        });
    }
    Ok(&lines[start..start + count])
}

/// Parse `<directive> <code> <strip|0> <add[/codes]> <condition|.>`.
fn parse_entry(
    line: &str,
    kind: AffixKind,
    mode: FlagMode,
    line_no: usize,
) -> Result<AffixEntry, AffixError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let directive = kind.directive();
    let strip = field(&parts, 2, line_no, directive)?;
    let addition = field(&parts, 3, line_no, directive)?;
    let condition = parts.get(4).copied().unwrap_or(".");

    let (add, continuation) = match addition.split_once('/') {
        Some((add, codes)) => (add, parse_rule_codes(codes, mode)),
        None => (addition, Vec::new()),
    };

    Ok(AffixEntry {
        strip: (strip != "0").then(|| strip.to_string()),
        add: if add == "0" { String::new() } else { add.to_string() },
        condition: compile_condition(condition, kind, line_no)?,
        continuation,
    })
}

fn compile_condition(
    condition: &str,
    kind: AffixKind,
    line: usize,
) -> Result<Option<Regex>, AffixError> {
    if condition == "." {
        return Ok(None);
    }
    let pattern = match kind {
        AffixKind::Suffix => format!("(?:{condition})$"),
        AffixKind::Prefix => format!("^(?:{condition})"),
    };
    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| AffixError::InvalidPattern {
            line,
            pattern: condition.to_string(),
            source,
        })
}
