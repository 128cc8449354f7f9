//! Greenhouse public board API source.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::posting::Posting;

use super::{PostingSource, SourceError};

const SOURCE_NAME: &str = "Greenhouse";

/// Fetches open postings for one Greenhouse board.
pub struct GreenhouseSource {
    org: String,
    client: reqwest::Client,
}

impl GreenhouseSource {
    pub fn new(org: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            org: org.into(),
            client,
        }
    }

    fn board_url(&self) -> String {
        format!(
            "https://boards-api.greenhouse.io/v1/boards/{}/jobs",
            self.org
        )
    }

    fn to_posting(&self, job: BoardJob) -> Posting {
        Posting {
            source: SOURCE_NAME.to_string(),
            organization: self.org.clone(),
            title: job.title,
            location: job.location.map(|l| l.name).unwrap_or_default(),
            url: job.absolute_url,
            department: job
                .departments
                .into_iter()
                .next()
                .and_then(|d| d.name)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    jobs: Vec<BoardJob>,
}

#[derive(Debug, Deserialize)]
struct BoardJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    absolute_url: String,
    #[serde(default)]
    location: Option<BoardLocation>,
    #[serde(default)]
    departments: Vec<BoardDepartment>,
}

#[derive(Debug, Deserialize)]
struct BoardLocation {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct BoardDepartment {
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl PostingSource for GreenhouseSource {
    fn name(&self) -> String {
        format!("{SOURCE_NAME}:{}", self.org)
    }

    async fn fetch(&self) -> Result<Vec<Posting>, SourceError> {
        let url = self.board_url();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let board: BoardResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(format!("{SOURCE_NAME} board {}: {e}", self.org)))?;

        Ok(board
            .jobs
            .into_iter()
            .map(|job| self.to_posting(job))
            .collect())
    }
}
