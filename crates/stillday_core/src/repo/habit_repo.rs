//! Habit repository and per-day completion tracking.
//!
//! # Responsibility
//! - Persist the habit collection and the date-keyed completion log.
//! - Derive the day's completion rate for display.
//!
//! # Invariants
//! - Completion state is membership in a per-date id set; each calendar day
//!   is independent and historical days stay retrievable by date.
//! - Removing a habit evicts it from the given day's set but leaves earlier
//!   days untouched.

use crate::model::habit::Habit;
use crate::repo::{
    load_collection, save_collection, RepoResult, HABITS_KEY, HABIT_COMPLETIONS_KEY,
};
use crate::store::KeyValueStore;
use crate::view::progress::completion_rate;
use chrono::NaiveDate;
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Mapping from date key to the set of habit ids completed that day.
type CompletionLog = BTreeMap<NaiveDate, BTreeSet<Uuid>>;

/// Store-backed repository for habits and their daily completions.
pub struct HabitRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> HabitRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns all habits in creation order.
    pub fn habits(&self) -> Vec<Habit> {
        load_collection(self.store, HABITS_KEY)
    }

    /// Appends a new habit with a fresh id and the current timestamp.
    ///
    /// Returns `None` without persisting anything when the trimmed name is
    /// empty.
    pub fn add_habit(&self, name: &str) -> RepoResult<Option<Habit>> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut habits = self.habits();
        let habit = Habit::new(trimmed);
        habits.push(habit.clone());
        save_collection(self.store, HABITS_KEY, &habits)?;

        info!("event=habit_add module=repo status=ok id={}", habit.id);
        Ok(Some(habit))
    }

    /// Removes a habit and evicts it from `today`'s completion set.
    ///
    /// No-op when the id is absent. Historical completion sets keep the id
    /// so past days remain accurate.
    pub fn remove_habit(&self, id: Uuid, today: NaiveDate) -> RepoResult<()> {
        let mut habits = self.habits();
        let before = habits.len();
        habits.retain(|habit| habit.id != id);
        if habits.len() != before {
            save_collection(self.store, HABITS_KEY, &habits)?;
            info!("event=habit_remove module=repo status=ok id={id}");
        }

        let mut log = self.completion_log();
        if let Some(completed) = log.get_mut(&today) {
            if completed.remove(&id) {
                if completed.is_empty() {
                    log.remove(&today);
                }
                save_collection(self.store, HABIT_COMPLETIONS_KEY, &log)?;
            }
        }

        Ok(())
    }

    /// Flips membership of `habit_id` in `today`'s completion set.
    ///
    /// Returns the new membership state.
    pub fn toggle_completion(&self, habit_id: Uuid, today: NaiveDate) -> RepoResult<bool> {
        let mut log = self.completion_log();
        let completed = log.entry(today).or_default();

        let now_completed = if completed.remove(&habit_id) {
            false
        } else {
            completed.insert(habit_id);
            true
        };
        if completed.is_empty() {
            log.remove(&today);
        }

        save_collection(self.store, HABIT_COMPLETIONS_KEY, &log)?;
        Ok(now_completed)
    }

    /// Returns whether `habit_id` is completed on `today`.
    pub fn is_completed(&self, habit_id: Uuid, today: NaiveDate) -> bool {
        self.completions_for_date(today).contains(&habit_id)
    }

    /// Returns the completion set stored for an arbitrary date.
    ///
    /// Empty when no set exists or the stored data is unreadable.
    pub fn completions_for_date(&self, date: NaiveDate) -> BTreeSet<Uuid> {
        self.completion_log().remove(&date).unwrap_or_default()
    }

    /// Percentage (0..=100) of habits completed on `today`; 0 with no habits.
    pub fn completion_rate(&self, today: NaiveDate) -> u8 {
        completion_rate(self.completions_for_date(today).len(), self.habits().len())
    }

    fn completion_log(&self) -> CompletionLog {
        load_collection(self.store, HABIT_COMPLETIONS_KEY)
    }
}
