//! Word-list source collaborator.
//!
//! Reads raw list content and carries a display label for the deck. Read
//! failures stay here; the caller reports them and leaves the current deck
//! untouched.

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Raw word-list content plus the label passed on to the deck.
#[derive(Debug, Clone)]
pub struct Source {
    pub content: String,
    pub label: String,
}

/// Read a UTF-8 word list from disk. The label is the file name; the deck
/// strips the extension itself.
pub fn read_file(path: &Path) -> Result<Source, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let label = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("default")
        .to_string();
    Ok(Source { content, label })
}

/// Bundled sample list, used when no file is given.
pub fn builtin_sample() -> Source {
    Source {
        content: include_str!("../data/sample_words.md").to_string(),
        label: "sample_words.md".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let result = read_file(Path::new("/nonexistent/words.txt"));
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn sample_parses_to_entries() {
        let sample = builtin_sample();
        let entries = worddeck_core::parse_content(&sample.content);
        assert!(!entries.is_empty());
    }
}
