//! Lever public postings API source.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::posting::Posting;

use super::{PostingSource, SourceError};

const SOURCE_NAME: &str = "Lever";

/// Fetches open postings for one Lever org.
pub struct LeverSource {
    org: String,
    client: reqwest::Client,
}

impl LeverSource {
    pub fn new(org: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            org: org.into(),
            client,
        }
    }

    fn postings_url(&self) -> String {
        format!("https://api.lever.co/v0/postings/{}?mode=json", self.org)
    }

    fn to_posting(&self, raw: LeverPosting) -> Posting {
        let categories = raw.categories.unwrap_or_default();
        // An empty categories.location falls back to workType, then to ""
        let location = categories
            .location
            .filter(|l| !l.is_empty())
            .or(raw.work_type)
            .unwrap_or_default();

        Posting {
            source: SOURCE_NAME.to_string(),
            organization: self.org.clone(),
            title: raw.text,
            location,
            url: raw.hosted_url,
            department: categories.team.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LeverPosting {
    #[serde(default)]
    text: String,
    #[serde(default, rename = "hostedUrl")]
    hosted_url: String,
    #[serde(default)]
    categories: Option<LeverCategories>,
    #[serde(default, rename = "workType")]
    work_type: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LeverCategories {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    team: Option<String>,
}

#[async_trait]
impl PostingSource for LeverSource {
    fn name(&self) -> String {
        format!("{SOURCE_NAME}:{}", self.org)
    }

    async fn fetch(&self) -> Result<Vec<Posting>, SourceError> {
        let url = self.postings_url();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let postings: Vec<LeverPosting> = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(format!("{SOURCE_NAME} org {}: {e}", self.org)))?;

        Ok(postings
            .into_iter()
            .map(|raw| self.to_posting(raw))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> LeverSource {
        LeverSource::new("acme", super::super::http_client())
    }

    #[test]
    fn test_posting_payload_maps_fields() {
        let payload = r#"[{
            "text": "Machine Learning Intern",
            "hostedUrl": "https://jobs.lever.co/acme/1",
            "categories": {"location": "Remote", "team": "Research"},
            "workType": "remote"
        }]"#;
        let raw: Vec<LeverPosting> = serde_json::from_str(payload).unwrap();
        let posting = source().to_posting(raw.into_iter().next().unwrap());

        assert_eq!(posting.source, "Lever");
        assert_eq!(posting.title, "Machine Learning Intern");
        assert_eq!(posting.location, "Remote");
        assert_eq!(posting.department, "Research");
        assert_eq!(posting.url, "https://jobs.lever.co/acme/1");
    }

    #[test]
    fn test_empty_location_falls_back_to_work_type() {
        let payload = r#"[{"text": "T", "categories": {"location": ""}, "workType": "hybrid"}]"#;
        let raw: Vec<LeverPosting> = serde_json::from_str(payload).unwrap();
        let posting = source().to_posting(raw.into_iter().next().unwrap());
        assert_eq!(posting.location, "hybrid");
    }

    #[test]
    fn test_missing_categories_tolerated() {
        let payload = r#"[{"text": "T"}]"#;
        let raw: Vec<LeverPosting> = serde_json::from_str(payload).unwrap();
        let posting = source().to_posting(raw.into_iter().next().unwrap());
        assert_eq!(posting.location, "");
        assert_eq!(posting.department, "");
    }

    #[test]
    fn test_source_label_includes_org() {
        assert_eq!(source().name(), "Lever:acme");
    }
}
