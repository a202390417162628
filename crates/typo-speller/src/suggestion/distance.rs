// Edit distances used to score suggestion candidates

/// How candidate scores are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Insertions, deletions and substitutions each cost 1.
    Levenshtein,
    /// Like `Levenshtein`, plus swapping two adjacent characters costs 1
    /// (optimal string alignment).
    #[default]
    Transposition,
}

impl DistanceMetric {
    pub fn distance(self, source: &str, target: &str) -> usize {
        match self {
            Self::Levenshtein => standard_distance(source, target),
            Self::Transposition => transposition_distance(source, target),
        }
    }
}

/// Standard Levenshtein distance between two strings, counted in
/// characters.
///
/// ```
/// use typo_speller::suggestion::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Levenshtein distance where an adjacent transposition is one edit.
///
/// ```
/// use typo_speller::suggestion::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("teh", "the"), 1);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(standard_distance("hello", "hello"), 0);
        assert_eq!(transposition_distance("hello", "hello"), 0);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(standard_distance("", "abc"), 3);
        assert_eq!(standard_distance("abc", ""), 3);
        assert_eq!(transposition_distance("", ""), 0);
    }

    #[test]
    fn single_edits() {
        assert_eq!(standard_distance("cat", "cats"), 1);
        assert_eq!(standard_distance("cats", "cat"), 1);
        assert_eq!(standard_distance("cat", "cut"), 1);
    }

    #[test]
    fn swap_costs_two_without_transposition() {
        assert_eq!(standard_distance("teh", "the"), 2);
        assert_eq!(transposition_distance("teh", "the"), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(standard_distance("café", "cafe"), 1);
        assert_eq!(transposition_distance("äö", "öä"), 1);
    }

    #[test]
    fn metric_dispatch() {
        assert_eq!(DistanceMetric::Levenshtein.distance("ab", "ba"), 2);
        assert_eq!(DistanceMetric::Transposition.distance("ab", "ba"), 1);
        assert_eq!(DistanceMetric::default(), DistanceMetric::Transposition);
    }

    #[test]
    fn symmetric() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("abcd", "badc")] {
            assert_eq!(standard_distance(a, b), standard_distance(b, a));
            assert_eq!(transposition_distance(a, b), transposition_distance(b, a));
        }
    }
}
