use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Pipeline configuration, loaded once at startup from a YAML file and
/// passed explicitly into every component that needs it. No ambient lookup:
/// nothing else reads the environment after `load` returns.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: Sources,
    pub filters: Filters,
    pub engine: Engine,
    pub log_csv: PathBuf,
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
}

/// Board orgs to poll, keyed by provider.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Sources {
    #[serde(default)]
    pub greenhouse: Vec<String>,
    #[serde(default)]
    pub lever: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

/// File locations for the tailoring inputs and outputs.
#[derive(Debug, Clone, Deserialize)]
pub struct Engine {
    pub profile_file: PathBuf,
    pub bank_file: PathBuf,
    pub stopwords_file: PathBuf,
    pub out_dir: PathBuf,
}

fn default_top_n() -> usize {
    5
}

fn default_rust_log() -> String {
    "info".to_string()
}

impl Config {
    /// Loads configuration from the file named by `CONFIG_PATH`, defaulting
    /// to `config.yaml` in the working directory.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
        Self::from_file(Path::new(&path))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file '{}'", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Malformed config file '{}'", path.display()))
    }
}
