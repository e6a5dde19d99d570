//! Core vocabulary-drill library shared by the worddeck applications.
//!
//! Provides:
//! - Word-list parser for `word[phonetic]meaning` text files
//! - Deck playback state machine (traversal, reveal, mastery removal)
//! - Pronunciation sink capability (Pronouncer)
//! - Shared types (Entry, DeckSnapshot)

pub mod deck;
pub mod parser;
pub mod speech;
pub mod types;

pub use deck::Deck;
pub use parser::parse_content;
pub use speech::{NullPronouncer, Pronouncer};
pub use types::{DeckSnapshot, Entry};
