//! Day-note repository.
//!
//! # Responsibility
//! - Persist at most one free-text note per calendar day.
//!
//! # Invariants
//! - `set_note` is upsert-or-delete-on-blank: blank text never persists and
//!   deletes an existing entry instead.
//! - `note_for_date` never raises; absent notes read back as `""`.

use crate::model::note::DayNote;
use crate::repo::{load_collection, save_collection, RepoResult, DAY_NOTES_KEY};
use crate::store::KeyValueStore;
use chrono::NaiveDate;

/// Outcome of a `set_note` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteChange {
    /// No note existed; one was inserted.
    Inserted,
    /// An existing note's text was replaced.
    Updated,
    /// Blank text deleted the existing note.
    Cleared,
    /// Blank text with no existing note; nothing was written.
    Unchanged,
}

/// Store-backed repository for per-day journal notes.
pub struct NoteRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> NoteRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Upserts the note for `date`, or deletes it when `text` is blank.
    pub fn set_note(&self, date: NaiveDate, text: &str) -> RepoResult<NoteChange> {
        let blank = text.trim().is_empty();
        let mut notes = self.notes();
        let existing = notes.iter().position(|note| note.date == date);

        let change = match (existing, blank) {
            (None, true) => return Ok(NoteChange::Unchanged),
            (None, false) => {
                notes.push(DayNote {
                    date,
                    note: text.to_string(),
                });
                NoteChange::Inserted
            }
            (Some(index), true) => {
                notes.remove(index);
                NoteChange::Cleared
            }
            (Some(index), false) => {
                notes[index].note = text.to_string();
                NoteChange::Updated
            }
        };

        save_collection(self.store, DAY_NOTES_KEY, &notes)?;
        Ok(change)
    }

    /// Returns the note stored for `date`, or `""` when none exists.
    pub fn note_for_date(&self, date: NaiveDate) -> String {
        self.notes()
            .into_iter()
            .find(|note| note.date == date)
            .map(|note| note.note)
            .unwrap_or_default()
    }

    fn notes(&self) -> Vec<DayNote> {
        load_collection(self.store, DAY_NOTES_KEY)
    }
}
