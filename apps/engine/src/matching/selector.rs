//! Content selection: picks the bank projects and general statements whose
//! tags best overlap a job description's token vocabulary.

use serde::Serialize;

use crate::matching::scoring::tag_overlap_score;
use crate::models::bank::{ContentBank, Project};

/// Upper bound on general statements per selection.
const GENERAL_LIMIT: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct SelectedProject {
    pub title: String,
    pub bullets: Vec<String>,
}

/// The bounded content chosen for one posting. Ephemeral: produced per
/// posting and consumed immediately by the assembler.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Selection {
    pub projects: Vec<SelectedProject>,
    pub general: Vec<String>,
}

/// Selects up to `max_projects` projects (each trimmed to `bullets_per`
/// bullets) plus up to two general statements.
///
/// Projects are ordered by sorting `(score, key)` pairs in reverse: highest
/// score first, and among equal scores the lexicographically later key.
/// General statements keep their declared order and are included only when
/// they overlap at all. An empty token collection selects nothing.
pub fn select(
    tokens: &[String],
    bank: &ContentBank,
    max_projects: usize,
    bullets_per: usize,
) -> Selection {
    if tokens.is_empty() {
        return Selection::default();
    }

    let mut scored: Vec<(usize, &str, &Project)> = bank
        .projects
        .iter()
        .map(|(key, project)| (tag_overlap_score(tokens, &project.tags), key.as_str(), project))
        .collect();
    scored.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));

    let projects = scored
        .into_iter()
        .take(max_projects)
        .map(|(_, _, project)| SelectedProject {
            title: project.title.clone(),
            bullets: project.bullets.iter().take(bullets_per).cloned().collect(),
        })
        .collect();

    let general = bank
        .general_statements
        .iter()
        .filter(|statement| tag_overlap_score(tokens, &statement.tags) > 0)
        .take(GENERAL_LIMIT)
        .map(|statement| statement.text.clone())
        .collect();

    Selection { projects, general }
}
