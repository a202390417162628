// Capitalization variants tried by dictionary lookups

/// Returns `true` if uppercasing the word leaves it unchanged.
///
/// This holds for all-uppercase words and for words without cased
/// letters ("123"), which both qualify for the uppercase lookup variants.
pub fn is_all_upper(word: &str) -> bool {
    word.to_uppercase() == word
}

/// Keep the first character as written and lowercase the remainder.
///
/// "HELLO" becomes "Hello".
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Lowercase the first character and keep the remainder as written.
///
/// "Hello" becomes "hello"; "HELLO" becomes "hELLO".
pub fn uncapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_upper_includes_words_without_letters() {
        assert!(is_all_upper("HELLO"));
        assert!(is_all_upper("42"));
        assert!(!is_all_upper("Hello"));
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("h"), "h");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn uncapitalize_keeps_the_tail() {
        assert_eq!(uncapitalize("Hello"), "hello");
        assert_eq!(uncapitalize("HELLO"), "hELLO");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn variants_handle_multibyte_first_char() {
        assert_eq!(capitalize("\u{00C9}COLE"), "\u{00C9}cole");
        assert_eq!(uncapitalize("\u{00C9}cole"), "\u{00E9}cole");
    }
}
