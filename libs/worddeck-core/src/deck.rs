//! Deck playback state machine.
//!
//! The deck owns the full entry list from the most recent load plus a
//! derived active set the learner traverses. Skipping a hidden card with
//! [`Deck::next`] counts as "already mastered" and removes it from the
//! active set; revealed cards advance normally. Removal is irreversible for
//! the session: [`Deck::previous`] navigates but never restores a mastered
//! word.

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::speech::Pronouncer;
use crate::types::{DeckSnapshot, Entry};

const DEFAULT_SOURCE_LABEL: &str = "default";

type ChangeCallback = Box<dyn FnMut(&DeckSnapshot) + Send>;

/// Stateful vocabulary deck.
///
/// Every mutating operation pronounces the current headword through the
/// injected [`Pronouncer`] and fires the on-change callback with a fresh
/// [`DeckSnapshot`].
pub struct Deck {
    entries: Vec<Entry>,
    active: Vec<Entry>,
    cursor: usize,
    revealed: bool,
    random_mode: bool,
    source_label: String,
    rng: StdRng,
    pronouncer: Box<dyn Pronouncer>,
    on_change: Option<ChangeCallback>,
}

impl Deck {
    pub fn new(pronouncer: Box<dyn Pronouncer>) -> Self {
        Self::with_rng(pronouncer, StdRng::from_entropy())
    }

    /// Deck with a deterministic shuffle order, for reproducible sessions.
    pub fn with_seed(pronouncer: Box<dyn Pronouncer>, seed: u64) -> Self {
        Self::with_rng(pronouncer, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pronouncer: Box<dyn Pronouncer>, rng: StdRng) -> Self {
        Self {
            entries: Vec::new(),
            active: Vec::new(),
            cursor: 0,
            revealed: false,
            random_mode: false,
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            rng,
            pronouncer,
            on_change: None,
        }
    }

    /// Register the callback fired after every mutating operation.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&DeckSnapshot) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Replace the deck contents with the parsed `content`.
    ///
    /// `label` is a file name or path; the label shown to the learner is its
    /// stem (extension stripped), or a fixed default when absent.
    pub fn load(&mut self, content: &str, label: Option<&str>) {
        self.entries = crate::parser::parse_content(content);
        self.source_label = derive_label(label);
        self.reset_playback();
        self.notify();
    }

    /// Flip between sequential and shuffled traversal.
    ///
    /// Rebuilds the active set from the full entry list, so words mastered
    /// this session come back.
    pub fn toggle_random_mode(&mut self) {
        self.random_mode = !self.random_mode;
        self.reset_playback();
        self.notify();
    }

    /// Show or hide the current card's phonetic and meaning. The cursor does
    /// not move, but the word is pronounced again.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
        self.notify();
    }

    /// Advance to the next card.
    ///
    /// A card skipped while still hidden is treated as already mastered and
    /// leaves the active set; the successor slides into the vacated slot, so
    /// the cursor stays put except when it just passed the end. A revealed
    /// card advances normally, wrapping at the end without reshuffling.
    pub fn next(&mut self) {
        if self.active.is_empty() {
            return;
        }
        if self.revealed {
            self.cursor = (self.cursor + 1) % self.active.len();
        } else {
            self.active.remove(self.cursor);
            if self.cursor >= self.active.len() {
                self.cursor = 0;
            }
        }
        self.revealed = false;
        self.notify();
    }

    /// Step back one card, wrapping from the front to the back.
    ///
    /// Purely navigational: never removes, and never restores a word already
    /// mastered this session.
    pub fn previous(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.active.len() - 1) % self.active.len();
        self.revealed = false;
        self.notify();
    }

    /// Pronounce the current headword again without changing any state.
    pub fn pronounce_current(&self) {
        if let Some(entry) = self.current_entry() {
            self.pronouncer.pronounce(&entry.text);
        }
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.active.get(self.cursor)
    }

    /// Full entry list from the most recent load.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries still in play, in traversal order.
    pub fn remaining_entries(&self) -> &[Entry] {
        &self.active
    }

    pub fn remaining_count(&self) -> usize {
        self.active.len()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.len() - self.active.len()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn random_mode(&self) -> bool {
        self.random_mode
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            current: self.current_entry().cloned(),
            revealed: self.revealed,
            random_mode: self.random_mode,
            source_label: self.source_label.clone(),
            remaining: self.remaining_count(),
            completed: self.completed_count(),
        }
    }

    fn reset_playback(&mut self) {
        self.active = self.entries.clone();
        if self.random_mode {
            self.active.shuffle(&mut self.rng);
        }
        self.cursor = 0;
        self.revealed = false;
    }

    fn notify(&mut self) {
        if let Some(entry) = self.current_entry() {
            self.pronouncer.pronounce(&entry.text);
        }
        let snapshot = self.snapshot();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&snapshot);
        }
    }
}

fn derive_label(label: Option<&str>) -> String {
    label
        .map(Path::new)
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_SOURCE_LABEL)
        .to_string()
}
