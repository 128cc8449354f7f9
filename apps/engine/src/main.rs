mod config;
mod content;
mod document;
mod errors;
mod matching;
mod models;
mod output;
mod runner;
mod sources;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::output::MarkdownStore;
use crate::runner::Pipeline;
use crate::sources::greenhouse::GreenhouseSource;
use crate::sources::jd::HttpJdFetcher;
use crate::sources::lever::LeverSource;
use crate::sources::PostingSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fatal on a missing or malformed file)
    let config = Config::load()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting engine v{}", env!("CARGO_PKG_VERSION"));

    // Profile, content bank, and stopwords must load cleanly before anything
    // is fetched; malformed content is fatal here.
    let profile = content::load_profile(&config.engine.profile_file)?;
    let bank = content::load_bank(&config.engine.bank_file)?;
    let stopwords = content::load_stopwords(&config.engine.stopwords_file)?;
    info!(
        "Content bank loaded: {} projects, {} general statements, {} stopwords",
        bank.projects.len(),
        bank.general_statements.len(),
        stopwords.len()
    );

    let client = sources::http_client();

    let mut posting_sources: Vec<Box<dyn PostingSource>> = Vec::new();
    for org in &config.sources.greenhouse {
        posting_sources.push(Box::new(GreenhouseSource::new(org.clone(), client.clone())));
    }
    for org in &config.sources.lever {
        posting_sources.push(Box::new(LeverSource::new(org.clone(), client.clone())));
    }
    info!("{} posting sources configured", posting_sources.len());

    let pipeline = Pipeline::new(
        config,
        profile,
        bank,
        stopwords,
        posting_sources,
        Box::new(HttpJdFetcher::new(client)),
        Box::new(MarkdownStore),
    )?;

    let summary = pipeline.run().await?;
    info!(
        "Run complete: {} postings fetched, {} matched, {} processed",
        summary.fetched, summary.matched, summary.processed
    );

    Ok(())
}
