//! Tag overlap scoring between declared content tags and JD tokens.

/// Counts how many tags have at least one substring hit among `tokens`.
///
/// A lowercased tag contributes 1 if it occurs inside any token; it is never
/// counted twice no matter how many tokens contain it. Substring containment
/// is deliberate and permissive: a short tag like `ml` also hits inside
/// `html`. Callers rely on this exact policy.
pub fn tag_overlap_score(tokens: &[String], tags: &[String]) -> usize {
    tags.iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| tokens.iter().any(|token| token.contains(tag.as_str())))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tags(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_score_never_exceeds_tag_count() {
        let tokens = toks(&["python", "python", "sql", "sql"]);
        let t = tags(&["python", "sql"]);
        assert_eq!(tag_overlap_score(&tokens, &t), 2);
    }

    #[test]
    fn test_tag_counted_once_across_many_tokens() {
        let tokens = toks(&["python", "pythonic", "cpython"]);
        assert_eq!(tag_overlap_score(&tokens, &tags(&["python"])), 1);
    }

    #[test]
    fn test_substring_policy_is_permissive() {
        // "ml" inside "html" counts; this is intentional behavior
        let tokens = toks(&["html"]);
        assert_eq!(tag_overlap_score(&tokens, &tags(&["ml"])), 1);
    }

    #[test]
    fn test_tags_are_lowercased_before_matching() {
        let tokens = toks(&["python"]);
        assert_eq!(tag_overlap_score(&tokens, &tags(&["Python"])), 1);
    }

    #[test]
    fn test_empty_tokens_score_zero() {
        assert_eq!(tag_overlap_score(&[], &tags(&["python", "sql"])), 0);
    }

    #[test]
    fn test_partial_and_full_overlap_ordering_inputs() {
        let tokens = toks(&["python", "healthcare", "analyst"]);
        assert_eq!(tag_overlap_score(&tokens, &tags(&["python", "sql"])), 1);
        assert_eq!(
            tag_overlap_score(&tokens, &tags(&["python", "healthcare"])),
            2
        );
    }
}
