//! Calendar-date key helpers.
//!
//! # Responsibility
//! - Provide the canonical "today" value for callers that want wall-clock time.
//! - Build the consecutive-day windows used by trend views.
//!
//! # Invariants
//! - Date keys serialize as `YYYY-MM-DD`, so string order equals calendar order.
//! - Repository APIs never read the clock themselves; "today" is always passed
//!   in explicitly so tests can simulate arbitrary days.

use chrono::{Days, Local, NaiveDate};

/// Window length used by the rating trend chart.
pub const TREND_WINDOW_DAYS: usize = 14;

/// Returns today's date in the device-local timezone.
///
/// Core code only calls this at the presentation boundary; everything below
/// takes the date as a parameter.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the `n` consecutive days ending at `today`, oldest first.
///
/// Days that would underflow the calendar are skipped, so the result can be
/// shorter than `n` only for dates near the representable minimum.
pub fn last_n_days(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .collect()
}

/// Returns the standard 14-day trend window ending at `today`.
pub fn last_14_days(today: NaiveDate) -> Vec<NaiveDate> {
    last_n_days(today, TREND_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::{last_14_days, last_n_days};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_n_days_is_consecutive_and_ends_today() {
        let today = day(2024, 1, 3);
        let window = last_n_days(today, 3);
        assert_eq!(
            window,
            vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]
        );
    }

    #[test]
    fn last_n_days_crosses_month_boundary() {
        let today = day(2024, 3, 1);
        let window = last_n_days(today, 2);
        assert_eq!(window, vec![day(2024, 2, 29), day(2024, 3, 1)]);
    }

    #[test]
    fn trend_window_has_fourteen_entries() {
        let window = last_14_days(day(2024, 6, 15));
        assert_eq!(window.len(), 14);
        assert_eq!(*window.last().unwrap(), day(2024, 6, 15));
    }
}
