use serde::{Deserialize, Serialize};

/// A single job opening normalized from a board source. Immutable once
/// fetched. Identity is the URL; the same job listed on two boards appears
/// twice (sources are concatenated, never deduplicated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub source: String,
    pub organization: String,
    pub title: String,
    pub location: String,
    pub url: String,
    pub department: String,
}

impl Posting {
    /// Lowercased corpus the filter and ranker match against:
    /// title, department, location, space-joined in that order.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.department, self.location).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_text_order_and_case() {
        let posting = Posting {
            source: "Greenhouse".to_string(),
            organization: "acme".to_string(),
            title: "Data Analyst".to_string(),
            location: "New York".to_string(),
            url: "https://example.com/jobs/1".to_string(),
            department: "Analytics".to_string(),
        };
        assert_eq!(posting.searchable_text(), "data analyst analytics new york");
    }
}
