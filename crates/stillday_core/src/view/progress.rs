//! Percentage aggregates for habit completion and goal progress.

use crate::model::goal::Rating;

/// Rounded percentage of completed habits; 0 when there are no habits.
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Flat arithmetic mean of ratings scaled from 1..=5 to 0..=100.
///
/// Deliberately unweighted by recency or count: one rating of 5 reads as
/// 100%, the same as a hundred ratings averaging 5.
pub fn long_term_progress(ratings: &[Rating]) -> u8 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: u32 = ratings.iter().map(|rating| u32::from(rating.get())).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean / f64::from(Rating::MAX) * 100.0).round() as u8
}
