//! Goal repository and daily-rating persistence.
//!
//! # Responsibility
//! - Persist the goal collection and its day-rating collection.
//! - Enforce the at-most-one-rating-per-(goal, date) invariant.
//! - Derive long-term progress from recorded ratings.
//!
//! # Invariants
//! - `set_rating` is an explicit three-way branch: absent inserts, a
//!   different value updates in place, the same value clears (toggle-off).
//! - Removing a goal cascades deletion of all its ratings.
//! - Long-term progress is a flat unweighted mean scaled to 0..=100.

use crate::model::goal::{DayRating, Goal, Rating};
use crate::repo::{load_collection, save_collection, RepoResult, GOALS_KEY, GOAL_RATINGS_KEY};
use crate::store::KeyValueStore;
use crate::view::progress::long_term_progress;
use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

/// Outcome of a `set_rating` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    /// No rating existed for the pair; one was inserted.
    Inserted,
    /// A different value existed; it was overwritten in place.
    Updated,
    /// The same value existed; the entry was removed (toggle-off).
    Cleared,
}

/// Store-backed repository for goals and their daily ratings.
pub struct GoalRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> GoalRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns all goals in creation order.
    pub fn goals(&self) -> Vec<Goal> {
        load_collection(self.store, GOALS_KEY)
    }

    /// Appends a new goal with a fresh id and the current timestamp.
    ///
    /// Returns `None` without persisting anything when the trimmed name is
    /// empty.
    pub fn add_goal(&self, name: &str) -> RepoResult<Option<Goal>> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut goals = self.goals();
        let goal = Goal::new(trimmed);
        goals.push(goal.clone());
        save_collection(self.store, GOALS_KEY, &goals)?;

        info!("event=goal_add module=repo status=ok id={}", goal.id);
        Ok(Some(goal))
    }

    /// Removes a goal and cascades deletion of all its ratings.
    ///
    /// No-op when the id is absent.
    pub fn remove_goal(&self, id: Uuid) -> RepoResult<()> {
        let mut goals = self.goals();
        let before = goals.len();
        goals.retain(|goal| goal.id != id);
        if goals.len() == before {
            return Ok(());
        }
        save_collection(self.store, GOALS_KEY, &goals)?;

        let mut ratings = self.ratings();
        let rated_before = ratings.len();
        ratings.retain(|rating| rating.goal_id != id);
        if ratings.len() != rated_before {
            save_collection(self.store, GOAL_RATINGS_KEY, &ratings)?;
        }

        info!(
            "event=goal_remove module=repo status=ok id={id} cascaded_ratings={}",
            rated_before - ratings.len()
        );
        Ok(())
    }

    /// Records `rating` for `(goal_id, date)` with toggle-off semantics.
    ///
    /// Re-submitting the value already stored for the pair clears the entry;
    /// this click-to-clear behavior is a deliberate UX contract.
    pub fn set_rating(
        &self,
        goal_id: Uuid,
        date: NaiveDate,
        rating: Rating,
    ) -> RepoResult<RatingChange> {
        let mut ratings = self.ratings();
        let existing = ratings
            .iter()
            .position(|entry| entry.goal_id == goal_id && entry.date == date);

        let change = match existing {
            Some(index) if ratings[index].rating == rating => {
                ratings.remove(index);
                RatingChange::Cleared
            }
            Some(index) => {
                ratings[index].rating = rating;
                RatingChange::Updated
            }
            None => {
                ratings.push(DayRating {
                    goal_id,
                    date,
                    rating,
                });
                RatingChange::Inserted
            }
        };

        save_collection(self.store, GOAL_RATINGS_KEY, &ratings)?;
        Ok(change)
    }

    /// Returns the rating recorded for `(goal_id, date)`, if any.
    pub fn rating_for_date(&self, goal_id: Uuid, date: NaiveDate) -> Option<Rating> {
        self.ratings()
            .into_iter()
            .find(|entry| entry.goal_id == goal_id && entry.date == date)
            .map(|entry| entry.rating)
    }

    /// Returns all ratings recorded for a goal, unordered.
    pub fn ratings_for_goal(&self, goal_id: Uuid) -> Vec<DayRating> {
        self.ratings()
            .into_iter()
            .filter(|entry| entry.goal_id == goal_id)
            .collect()
    }

    /// Flat-mean progress for a goal on a 0..=100 scale; 0 when unrated.
    pub fn long_term_progress(&self, goal_id: Uuid) -> u8 {
        let ratings: Vec<Rating> = self
            .ratings_for_goal(goal_id)
            .into_iter()
            .map(|entry| entry.rating)
            .collect();
        long_term_progress(&ratings)
    }

    fn ratings(&self) -> Vec<DayRating> {
        load_collection(self.store, GOAL_RATINGS_KEY)
    }
}
