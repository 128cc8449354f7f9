//! Turns free job-description text into normalized content tokens.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Word/punctuation units: runs of word characters, or runs of
/// non-word non-space characters (so `c++` splits into `c` and `++`).
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").expect("static regex"));

/// Tokenizes `text` into lowercase content tokens.
///
/// Each unit is lowercased, then stripped of every character outside
/// `{a-z, 0-9, +, -, #}`. Units that end up empty and units present in
/// `stopwords` are dropped. Output order mirrors the input, but consumers
/// treat the result as a membership set.
///
/// Total over all inputs: malformed text just yields fewer tokens.
pub fn tokenize(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|unit| normalize(unit.as_str()))
        .filter(|token| !token.is_empty() && !stopwords.contains(token))
        .collect()
}

fn normalize(unit: &str) -> String {
    unit.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '+' | '-' | '#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Senior Data Analyst (Healthcare)", &stopwords(&[]));
        assert_eq!(tokens, vec!["senior", "data", "analyst", "healthcare"]);
    }

    #[test]
    fn test_keeps_plus_hash_and_hyphen() {
        let tokens = tokenize("C++ and C# experience", &stopwords(&["and"]));
        assert_eq!(tokens, vec!["c", "++", "c", "#", "experience"]);
    }

    #[test]
    fn test_hyphenated_terms_split_at_word_boundaries() {
        // wordpunct-style splitting separates the hyphen from its words
        let tokens = tokenize("machine-learning", &stopwords(&[]));
        assert_eq!(tokens, vec!["machine", "-", "learning"]);
    }

    #[test]
    fn test_stopwords_removed_after_normalization() {
        let tokens = tokenize("The quick, THE lazy", &stopwords(&["the"]));
        assert_eq!(tokens, vec!["quick", "lazy"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert!(tokenize("", &stopwords(&[])).is_empty());
        assert!(tokenize("   \n\t  ", &stopwords(&[])).is_empty());
    }

    #[test]
    fn test_non_ascii_characters_are_stripped() {
        let tokens = tokenize("résumé naïve", &stopwords(&[]));
        assert_eq!(tokens, vec!["rsum", "nave"]);
    }

    #[test]
    fn test_numbers_survive() {
        let tokens = tokenize("5+ years, SQL 2019", &stopwords(&["years"]));
        assert_eq!(tokens, vec!["5", "+", "sql", "2019"]);
    }
}
