//! Job-description text collaborator.
//!
//! Reduces the posting page to best-effort plain text: script/style blocks
//! dropped, markup stripped, common entities unescaped, blank-line runs
//! collapsed. Pages that render their description client-side come back
//! sparse; the runner treats that like any other thin JD.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{JdFetcher, SourceError};

const USER_AGENT: &str = "Mozilla/5.0";

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:script|style)[^>]*>.*?</(?:script|style)>").expect("static regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("static regex"));
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("static regex"));

pub struct HttpJdFetcher {
    client: reqwest::Client,
}

impl HttpJdFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JdFetcher for HttpJdFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(html_to_text(&body))
    }
}

/// Best-effort HTML-to-text reduction. Never fails; garbage in, fewer
/// tokens out.
pub fn html_to_text(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, "");
    let without_tags = TAG_RE.replace_all(&without_scripts, "\n");
    let unescaped = without_tags
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"");

    let trimmed_lines: Vec<&str> = unescaped.lines().map(str::trim).collect();
    BLANK_RUN_RE
        .replace_all(&trimmed_lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}
