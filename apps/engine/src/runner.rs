//! Pipeline orchestration.
//!
//! Flow: fetch sources → filter → rank → top-N → per posting:
//! JD fetch → tokenize → select → assemble → persist → log.
//!
//! The only mutable accumulation is the activity log, owned here. Every
//! collaborator failure is per-item: a dead board, an unreachable JD page,
//! or a failed write is reported and the batch moves on.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::assembler::{assemble_cover_letter, assemble_resume};
use crate::errors::AppError;
use crate::matching::filter::FilterSpec;
use crate::matching::ranker::rank_key;
use crate::matching::selector::select;
use crate::matching::tokenizer::tokenize;
use crate::models::bank::ContentBank;
use crate::models::posting::Posting;
use crate::models::profile::Profile;
use crate::output::activity_log::{ActivityLog, ActivityRecord};
use crate::output::DocumentStore;
use crate::sources::{JdFetcher, PostingSource};

/// Projects per tailored resume.
const MAX_PROJECTS: usize = 3;
/// Bullets kept per selected project.
const BULLETS_PER_PROJECT: usize = 2;

/// Counters reported after a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub matched: usize,
    pub processed: usize,
}

pub struct Pipeline {
    config: Config,
    profile: Profile,
    bank: ContentBank,
    stopwords: HashSet<String>,
    filter: FilterSpec,
    sources: Vec<Box<dyn PostingSource>>,
    jd_fetcher: Box<dyn JdFetcher>,
    store: Box<dyn DocumentStore>,
}

impl Pipeline {
    /// Compiles the filter patterns up front; bad patterns are fatal here,
    /// before anything is fetched.
    pub fn new(
        config: Config,
        profile: Profile,
        bank: ContentBank,
        stopwords: HashSet<String>,
        sources: Vec<Box<dyn PostingSource>>,
        jd_fetcher: Box<dyn JdFetcher>,
        store: Box<dyn DocumentStore>,
    ) -> Result<Self, AppError> {
        let filter = FilterSpec::compile(&config.filters.required, &config.filters.exclude)?;
        Ok(Self {
            config,
            profile,
            bank,
            stopwords,
            filter,
            sources,
            jd_fetcher,
            store,
        })
    }

    pub async fn run(&self) -> Result<RunSummary, AppError> {
        // Step 1: concatenate every source; a failed board contributes
        // nothing but never aborts the run.
        let mut postings: Vec<Posting> = Vec::new();
        for source in &self.sources {
            match source.fetch().await {
                Ok(batch) => {
                    info!("{}: {} postings", source.name(), batch.len());
                    postings.extend(batch);
                }
                Err(e) => warn!("{} unavailable, continuing without it: {e}", source.name()),
            }
        }
        let fetched = postings.len();

        // Step 2: filter, then stable-sort ascending by rank key. Equal keys
        // keep their fetch order.
        let mut matches: Vec<Posting> = postings
            .into_iter()
            .filter(|posting| self.filter.accepts(posting))
            .collect();
        matches.sort_by_key(rank_key);
        let matched = matches.len();
        matches.truncate(self.config.filters.top_n);

        info!("Found {matched} matching postings, taking top {}", matches.len());
        for (i, posting) in matches.iter().enumerate() {
            info!(
                "{}. {} - {} ({})",
                i + 1,
                posting.title,
                posting.organization,
                posting.url
            );
        }

        // Step 3: tailor one posting at a time, in ranked order.
        let log = ActivityLog::new(&self.config.log_csv);
        let mut processed = 0;
        for (i, posting) in matches.iter().enumerate() {
            match self.process_posting(i + 1, posting, &log).await {
                Ok(()) => processed += 1,
                Err(e) => warn!("Skipping '{}': {e}", posting.title),
            }
        }

        Ok(RunSummary {
            fetched,
            matched,
            processed,
        })
    }

    /// Tailors and persists the artifacts for one posting. A JD fetch
    /// failure degrades to empty text; a persistence failure skips only
    /// this posting.
    async fn process_posting(
        &self,
        index: usize,
        posting: &Posting,
        log: &ActivityLog,
    ) -> Result<(), AppError> {
        let jd_text = match self.jd_fetcher.fetch_text(&posting.url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("JD fetch failed for {}, tailoring from empty text: {e}", posting.url);
                String::new()
            }
        };

        let tokens = tokenize(&jd_text, &self.stopwords);
        let selection = select(&tokens, &self.bank, MAX_PROJECTS, BULLETS_PER_PROJECT);
        info!(
            "'{}': {} tokens, {} projects, {} general statements",
            posting.title,
            tokens.len(),
            selection.projects.len(),
            selection.general.len()
        );

        let resume = assemble_resume(&self.profile, &selection, &tokens);
        let cover = assemble_cover_letter(&self.profile, posting, &selection);

        let ts = Utc::now().timestamp();
        let out_dir = &self.config.engine.out_dir;
        let resume_path = out_dir.join(format!("resume_{ts}_{index}.md"));
        let cover_path = out_dir.join(format!("cover_{ts}_{index}.md"));
        self.store.save(&resume, &resume_path)?;
        self.store.save(&cover, &cover_path)?;

        if let Err(e) = log.append(&ActivityRecord {
            time: ts,
            title: posting.title.clone(),
            org: posting.organization.clone(),
            url: posting.url.clone(),
            resume: resume_path.display().to_string(),
            cover: cover_path.display().to_string(),
        }) {
            // best-effort downstream action: report, never abort the batch
            warn!("Activity log write failed for '{}': {e}", posting.title);
        }

        Ok(())
    }
}
