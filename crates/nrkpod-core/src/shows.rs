//! The list of show identifiers a run processes.
//!
//! Read from a plain text file with one show id per line (the id is the slug
//! in the show URL, e.g. `monsens_univers`). When the file is missing,
//! unreadable or empty, the built-in default list is used instead.

use std::io::ErrorKind;
use std::path::Path;

use crate::ConfigError;

pub const DEFAULT_SHOWS: &[&str] = &["monsens_univers"];

#[must_use]
pub fn default_show_list() -> Vec<String> {
    DEFAULT_SHOWS.iter().map(|s| (*s).to_string()).collect()
}

/// Splits file content into show ids, trimming whitespace and dropping blank lines.
#[must_use]
pub fn parse_show_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads and parses a show list file.
///
/// # Errors
///
/// Returns [`ConfigError::ShowListIo`] if the file cannot be read.
pub fn read_show_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ShowListIo {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_show_list(&content))
}

/// Loads the show list from `path`, falling back to [`default_show_list`].
///
/// Never fails: a missing file is expected, anything else is logged.
#[must_use]
pub fn load_show_list(path: &Path) -> Vec<String> {
    match read_show_list(path) {
        Ok(shows) if shows.is_empty() => {
            tracing::warn!(path = %path.display(), "show list is empty; using default shows");
            default_show_list()
        }
        Ok(shows) => {
            tracing::info!(path = %path.display(), count = shows.len(), "loaded show list");
            shows
        }
        Err(ConfigError::ShowListIo { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no show list file; using default shows");
            default_show_list()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read show list; using default shows");
            default_show_list()
        }
    }
}
