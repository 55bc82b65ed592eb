//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stillday_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let today = stillday_core::date::today_local();
    let quote = stillday_core::quote_for_date(today);

    println!("stillday_core ping={}", stillday_core::ping());
    println!("stillday_core version={}", stillday_core::core_version());
    println!("quote of {today}: \"{}\" ({})", quote.text, quote.author);
}
