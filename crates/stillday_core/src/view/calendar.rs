//! Month-grid layout computation for the calendar view.
//!
//! # Invariants
//! - Weeks start on Monday: day 1 is preceded by `(weekday + 6) % 7` blank
//!   cells counting weekdays from Sunday, which equals the days since Monday.
//! - The grid is a pure function of `(year, month)`.

use chrono::{Datelike, NaiveDate};

/// Cell layout for one Gregorian month in a Monday-first week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    /// Blank cells before day 1 in the first week row.
    pub leading_blanks: u8,
    /// Number of days in the month (28..=31).
    pub days_in_month: u8,
}

/// Computes the grid for `month0` (zero-based) of `year`.
///
/// Returns `None` for `month0 >= 12` or years outside chrono's range.
pub fn month_grid(year: i32, month0: u32) -> Option<MonthGrid> {
    if month0 >= 12 {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let leading_blanks = first.weekday().num_days_from_monday() as u8;

    // Last day of this month = the day before the first of the next month.
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)?
    };
    let days_in_month = next_first.pred_opt()?.day() as u8;

    Some(MonthGrid {
        leading_blanks,
        days_in_month,
    })
}

#[cfg(test)]
mod tests {
    use super::{month_grid, MonthGrid};

    #[test]
    fn month_starting_on_wednesday_has_two_leading_blanks() {
        // May 2024 starts on a Wednesday.
        assert_eq!(
            month_grid(2024, 4),
            Some(MonthGrid {
                leading_blanks: 2,
                days_in_month: 31,
            })
        );
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_blanks() {
        // January 2024 starts on a Monday.
        assert_eq!(
            month_grid(2024, 0),
            Some(MonthGrid {
                leading_blanks: 0,
                days_in_month: 31,
            })
        );
    }

    #[test]
    fn month_starting_on_sunday_fills_the_first_row() {
        // September 2024 starts on a Sunday.
        assert_eq!(
            month_grid(2024, 8),
            Some(MonthGrid {
                leading_blanks: 6,
                days_in_month: 30,
            })
        );
    }

    #[test]
    fn leap_february_has_twenty_nine_days() {
        assert_eq!(month_grid(2024, 1).unwrap().days_in_month, 29);
        assert_eq!(month_grid(2023, 1).unwrap().days_in_month, 28);
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        // December 2025 starts on a Monday.
        assert_eq!(
            month_grid(2025, 11),
            Some(MonthGrid {
                leading_blanks: 0,
                days_in_month: 31,
            })
        );
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert_eq!(month_grid(2024, 12), None);
    }
}
