//! Heuristic ordering for accepted postings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::posting::Posting;

// Each heuristic bumps raw desirability; the key is the negated sum so the
// most desirable postings sort first under a plain ascending sort.
static ANALYST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\banalyst|analytics\b").expect("static regex"));
static ENTRY_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bintern|entry|junior\b").expect("static regex"));
static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ml|machine learning|research|health|bio").expect("static regex"));
static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"remote|hybrid|new york|nyc").expect("static regex"));

/// Ordering key: lower sorts first. Ties keep their pre-sort relative order
/// under a stable sort; there is deliberately no secondary key.
pub fn rank_key(posting: &Posting) -> i32 {
    let corpus = posting.searchable_text();
    let mut score = 0;
    if ANALYST_RE.is_match(&corpus) {
        score += 2;
    }
    if ENTRY_LEVEL_RE.is_match(&corpus) {
        score += 1;
    }
    if DOMAIN_RE.is_match(&corpus) {
        score += 1;
    }
    if LOCATION_RE.is_match(&corpus) {
        score += 1;
    }
    -score
}
