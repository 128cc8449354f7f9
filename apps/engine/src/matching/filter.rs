//! Accept/reject gate for fetched postings.

use regex::Regex;

use crate::errors::AppError;
use crate::models::posting::Posting;

/// Compiled posting filter.
///
/// Pattern text is lowercased before compilation and matched against the
/// lowercased searchable corpus, which makes matching case-insensitive while
/// regex metacharacters keep their meaning. Invalid patterns fail here, at
/// startup, not at match time.
#[derive(Debug)]
pub struct FilterSpec {
    required: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl FilterSpec {
    pub fn compile(required: &[String], exclude: &[String]) -> Result<Self, AppError> {
        Ok(Self {
            required: compile_all(required)?,
            exclude: compile_all(exclude)?,
        })
    }

    /// Total over all postings: accepts only if every required pattern
    /// search-matches the posting's corpus and no exclude pattern does.
    pub fn accepts(&self, posting: &Posting) -> bool {
        let corpus = posting.searchable_text();
        self.required.iter().all(|re| re.is_match(&corpus))
            && !self.exclude.iter().any(|re| re.is_match(&corpus))
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, AppError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&pattern.to_lowercase())
                .map_err(|e| AppError::Config(format!("Invalid filter pattern '{pattern}': {e}")))
        })
        .collect()
}
