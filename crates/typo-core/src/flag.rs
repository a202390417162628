// Rule-code tokenization for the four FLAG encodings

/// How a run of rule codes (`cat/SM`, `cat/AaBb`, `cat/12,7`) is split
/// into individual codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlagMode {
    /// One character per code. Also used for unrecognized `FLAG` values.
    #[default]
    Single,
    /// Two characters per code (`FLAG long`).
    Long,
    /// Comma-separated decimal numbers (`FLAG num`).
    Num,
    /// One Unicode scalar value per code (`FLAG UTF-8`).
    Utf8,
}

impl FlagMode {
    /// Select the mode from the value of the `FLAG` directive, if any.
    pub fn from_flag_value(value: Option<&str>) -> Self {
        match value {
            Some("long") => Self::Long,
            Some("num") => Self::Num,
            Some("UTF-8") => Self::Utf8,
            _ => Self::Single,
        }
    }

    /// Whether codes in this mode span more than one character, which
    /// requires grouping them as `(xx)` inside compound rules.
    pub fn is_multi_char(self) -> bool {
        matches!(self, Self::Long | Self::Num)
    }
}

/// Split rule-code text into individual codes.
///
/// Empty text yields no codes. In `Long` mode a trailing odd character
/// becomes a one-character code.
pub fn parse_rule_codes(text: &str, mode: FlagMode) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    match mode {
        FlagMode::Single | FlagMode::Utf8 => text.chars().map(String::from).collect(),
        FlagMode::Long => {
            let chars: Vec<char> = text.chars().collect();
            chars.chunks(2).map(|pair| pair.iter().collect()).collect()
        }
        FlagMode::Num => text.split(',').map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str, mode: FlagMode) -> Vec<String> {
        parse_rule_codes(text, mode)
    }

    #[test]
    fn mode_from_flag_value() {
        assert_eq!(FlagMode::from_flag_value(None), FlagMode::Single);
        assert_eq!(FlagMode::from_flag_value(Some("long")), FlagMode::Long);
        assert_eq!(FlagMode::from_flag_value(Some("num")), FlagMode::Num);
        assert_eq!(FlagMode::from_flag_value(Some("UTF-8")), FlagMode::Utf8);
    }

    #[test]
    fn unknown_flag_value_falls_back_to_single() {
        assert_eq!(FlagMode::from_flag_value(Some("ISO8859-1")), FlagMode::Single);
    }

    #[test]
    fn empty_text_has_no_codes() {
        assert!(codes("", FlagMode::Single).is_empty());
        assert!(codes("", FlagMode::Num).is_empty());
    }

    #[test]
    fn single_mode_splits_characters() {
        assert_eq!(codes("SM", FlagMode::Single), vec!["S", "M"]);
    }

    #[test]
    fn long_mode_splits_pairs() {
        assert_eq!(codes("AaBb", FlagMode::Long), vec!["Aa", "Bb"]);
        assert_eq!(codes("AaB", FlagMode::Long), vec!["Aa", "B"]);
    }

    #[test]
    fn num_mode_splits_on_commas() {
        assert_eq!(codes("12,7,300", FlagMode::Num), vec!["12", "7", "300"]);
    }

    #[test]
    fn utf8_mode_splits_scalar_values() {
        assert_eq!(codes("\u{00C4}\u{1F600}", FlagMode::Utf8), vec!["\u{00C4}", "\u{1F600}"]);
    }

    #[test]
    fn multi_char_modes() {
        assert!(FlagMode::Long.is_multi_char());
        assert!(FlagMode::Num.is_multi_char());
        assert!(!FlagMode::Single.is_multi_char());
        assert!(!FlagMode::Utf8.is_multi_char());
    }
}
