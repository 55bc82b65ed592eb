//! Calendar-intention repository.
//!
//! # Responsibility
//! - Persist per-date intentions and their done flags.
//! - Report which calendar days carry intentions, for calendar-cell markers.
//!
//! # Invariants
//! - Several intentions may share one date; order within a date is insertion
//!   order.
//! - Intentions never cascade from any other entity's lifecycle.

use crate::model::intention::Intention;
use crate::repo::{load_collection, save_collection, RepoResult, INTENTIONS_KEY};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::info;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Store-backed repository for calendar intentions.
pub struct IntentionRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> IntentionRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns the whole intention collection in insertion order.
    pub fn intentions(&self) -> Vec<Intention> {
        load_collection(self.store, INTENTIONS_KEY)
    }

    /// Appends a new not-yet-done intention for `date`.
    ///
    /// Returns `None` without persisting anything when the trimmed text is
    /// empty.
    pub fn add_intention(&self, date: NaiveDate, text: &str) -> RepoResult<Option<Intention>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut intentions = self.intentions();
        let intention = Intention::new(date, trimmed);
        intentions.push(intention.clone());
        save_collection(self.store, INTENTIONS_KEY, &intentions)?;

        info!(
            "event=intention_add module=repo status=ok id={} date={date}",
            intention.id
        );
        Ok(Some(intention))
    }

    /// Flips the done flag of an intention. No-op when the id is absent.
    pub fn toggle_intention(&self, id: Uuid) -> RepoResult<()> {
        let mut intentions = self.intentions();
        let Some(intention) = intentions.iter_mut().find(|entry| entry.id == id) else {
            return Ok(());
        };
        intention.done = !intention.done;
        save_collection(self.store, INTENTIONS_KEY, &intentions)
    }

    /// Deletes an intention unconditionally. No-op when the id is absent.
    pub fn remove_intention(&self, id: Uuid) -> RepoResult<()> {
        let mut intentions = self.intentions();
        let before = intentions.len();
        intentions.retain(|entry| entry.id != id);
        if intentions.len() == before {
            return Ok(());
        }
        save_collection(self.store, INTENTIONS_KEY, &intentions)
    }

    /// Returns the intentions set for exactly `date`, insertion order.
    pub fn intentions_for_date(&self, date: NaiveDate) -> Vec<Intention> {
        self.intentions()
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    /// Distinct dates that carry at least one intention.
    pub fn dates_with_intentions(&self) -> BTreeSet<NaiveDate> {
        self.intentions()
            .into_iter()
            .map(|entry| entry.date)
            .collect()
    }
}
