//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vocabulary entry parsed from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable for the entry's lifetime, assigned at parse time.
    pub id: Uuid,
    /// Headword. Never empty after a successful parse.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Definition. Empty only for bare single-token lines.
    pub meaning: String,
}

impl Entry {
    pub fn new(text: &str, phonetic: Option<&str>, meaning: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            phonetic: phonetic.map(str::to_string),
            meaning: meaning.to_string(),
        }
    }
}

/// Observable deck state handed to the on-change callback after every
/// mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Entry>,
    pub revealed: bool,
    pub random_mode: bool,
    pub source_label: String,
    pub remaining: usize,
    pub completed: usize,
}
