//! Sparse rating-trend series for line/point charts.
//!
//! # Invariants
//! - Output preserves window date order and carries one point per rated day.
//! - Days without a rating are absent, never interpolated or zero-filled.

use crate::model::goal::{DayRating, Rating};
use chrono::NaiveDate;
use std::collections::HashMap;

/// One chart point: index into the date window plus the recorded rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    /// Zero-based position of the rated day within the window.
    pub day_index: usize,
    /// Rating recorded for that day.
    pub rating: Rating,
}

/// Projects a goal's ratings onto an ordered window of calendar days.
///
/// `window` is typically `date::last_14_days(today)`. The result is the sole
/// input any renderer needs; this computation knows nothing about drawing.
pub fn trend_points(window: &[NaiveDate], ratings: &[DayRating]) -> Vec<TrendPoint> {
    let by_date: HashMap<NaiveDate, Rating> = ratings
        .iter()
        .map(|entry| (entry.date, entry.rating))
        .collect();

    window
        .iter()
        .enumerate()
        .filter_map(|(day_index, date)| {
            by_date.get(date).map(|&rating| TrendPoint { day_index, rating })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{trend_points, TrendPoint};
    use crate::model::goal::{DayRating, Rating};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn rated(goal_id: Uuid, d: u32, value: u8) -> DayRating {
        DayRating {
            goal_id,
            date: day(d),
            rating: Rating::new(value).unwrap(),
        }
    }

    #[test]
    fn unrated_days_are_absent_from_the_series() {
        let goal_id = Uuid::new_v4();
        let window = [day(1), day(2), day(3)];
        let ratings = [rated(goal_id, 1, 4), rated(goal_id, 2, 2)];

        let points = trend_points(&window, &ratings);
        assert_eq!(
            points,
            vec![
                TrendPoint {
                    day_index: 0,
                    rating: Rating::new(4).unwrap()
                },
                TrendPoint {
                    day_index: 1,
                    rating: Rating::new(2).unwrap()
                },
            ]
        );
    }

    #[test]
    fn ratings_outside_the_window_are_ignored() {
        let goal_id = Uuid::new_v4();
        let window = [day(10), day(11)];
        let ratings = [rated(goal_id, 1, 5)];

        assert!(trend_points(&window, &ratings).is_empty());
    }

    #[test]
    fn empty_ratings_yield_empty_series() {
        let window = [day(1), day(2)];
        assert!(trend_points(&window, &[]).is_empty());
    }
}
