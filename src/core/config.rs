//! Runtime configuration: an optional JSON file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::games::hangman::SelectionPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list to draw from; `None` uses the bundled list
    pub words_file: Option<PathBuf>,
    pub selection: SelectionPolicy,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: None,
            selection: SelectionPolicy::Random,
            seed: None,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub words_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub first: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Defaults when `path` is `None`; an explicit path must exist.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.words_file.is_some() {
            self.words_file = overrides.words_file;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.first {
            self.selection = SelectionPolicy::First;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("hangterm.log"))
    }
}
