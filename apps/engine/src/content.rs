//! Loaders for the static content the pipeline tailors from: candidate
//! profile, content bank, and stopword list.
//!
//! Everything here is fail-fast: a file that cannot be read or parsed aborts
//! startup before any posting is fetched. Downstream code (tokenizer,
//! selector, assembler) assumes the loaded data is well-formed and never
//! re-validates it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::AppError;
use crate::models::bank::ContentBank;
use crate::models::profile::Profile;

pub fn load_profile(path: &Path) -> Result<Profile, AppError> {
    let raw = read(path)?;
    serde_yaml::from_str(&raw)
        .map_err(|e| AppError::ContentBank(format!("Malformed profile '{}': {e}", path.display())))
}

pub fn load_bank(path: &Path) -> Result<ContentBank, AppError> {
    let raw = read(path)?;
    serde_yaml::from_str(&raw)
        .map_err(|e| AppError::ContentBank(format!("Malformed bank '{}': {e}", path.display())))
}

/// One stopword per line, trimmed and lowercased; blank lines ignored.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, AppError> {
    let raw = read(path)?;
    Ok(raw
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map_err(|e| AppError::ContentBank(format!("Cannot read '{}': {e}", path.display())))
}
