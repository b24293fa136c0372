/// Word-source loading for hangman rounds
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

const BUNDLED_WORDS: &str = include_str!("../../../assets/words.txt");

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("could not read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} has no words")]
    Empty { path: PathBuf },
}

/// One word per line; blank lines and `#` comments are dropped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&text);
    if words.is_empty() {
        return Err(WordSourceError::Empty { path: path.to_path_buf() });
    }

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// The list compiled into the binary, used when no file is configured.
pub fn bundled_words() -> Vec<String> {
    parse_words(BUNDLED_WORDS)
}

/// Load from `path` if given, otherwise fall back to the bundled list.
pub fn load_or_bundled(path: Option<&Path>) -> Result<Vec<String>, WordSourceError> {
    match path {
        Some(path) => load_words(path),
        None => Ok(bundled_words()),
    }
}
