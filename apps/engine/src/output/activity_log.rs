//! Append-only CSV log of processed postings.

use std::fs::OpenOptions;
use std::path::PathBuf;

use serde::Serialize;

use crate::errors::AppError;

/// One row per posting whose artifacts were written.
#[derive(Debug, Serialize)]
pub struct ActivityRecord {
    pub time: i64,
    pub title: String,
    pub org: String,
    pub url: String,
    pub resume: String,
    pub cover: String,
}

/// Append-only CSV activity log. The header row is written only when the
/// file does not yet exist. Owned exclusively by the runner; log failures
/// are reported by the caller, never propagated into the batch.
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, record: &ActivityRecord) -> Result<(), AppError> {
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::Persistence(format!("open '{}': {e}", self.path.display())))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| AppError::Persistence(format!("append '{}': {e}", self.path.display())))?;
        writer
            .flush()
            .map_err(|e| AppError::Persistence(format!("flush '{}': {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ActivityRecord {
        ActivityRecord {
            time: 1_700_000_000,
            title: title.to_string(),
            org: "acme".to_string(),
            url: "https://example.com/jobs/1".to_string(),
            resume: "out/resume_1.md".to_string(),
            cover: "out/cover_1.md".to_string(),
        }
    }

    #[test]
    fn test_header_written_once_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = ActivityLog::new(&path);

        log.append(&record("First")).unwrap();
        log.append(&record("Second")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time,title,org,url,resume,cover");
        assert!(lines[1].contains("First"));
        assert!(lines[2].contains("Second"));
    }

    #[test]
    fn test_row_fields_in_declared_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = ActivityLog::new(&path);
        log.append(&record("Data Analyst")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents
            .lines()
            .nth(1)
            .unwrap()
            .starts_with("1700000000,Data Analyst,acme,"));
    }

    #[test]
    fn test_unwritable_path_is_persistence_error() {
        let log = ActivityLog::new("/nonexistent/dir/log.csv");
        let err = log.append(&record("X")).unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }
}
