//! Currency and relative date/time formatting
//!
//! Every function takes its reference clock as a parameter. Amounts are
//! rendered unsigned by `format_currency`; `format_signed_currency` is the one
//! place that decides whether a leading `-` is shown.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::Money;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Absolute value with two fraction digits and the default symbol
///
/// `format_currency(-1245.30)` is `"$1245.30"`.
pub fn format_currency(amount: Money) -> String {
    format_currency_with(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Absolute value with two fraction digits and a caller-chosen symbol
pub fn format_currency_with(amount: Money, symbol: &str) -> String {
    let abs = amount.abs();
    format!("{}{}.{:02}", symbol, abs.units(), abs.cents_part())
}

/// Amount with a leading `-` when negative: `-$1245.30`
pub fn format_signed_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}", sign, format_currency_with(amount, symbol))
}

/// "Just now", "{n}m ago", "{n}h ago", or a `M/D/YYYY` date
///
/// Timestamps later than `now` read as "Just now".
pub fn format_relative_time<Tz>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let elapsed = now.clone().signed_duration_since(timestamp.clone());
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}

/// "Today", "Tomorrow", "Mar 15", or "Mar 15, 2026" when the year differs
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Human-readable file size: "512 B", "2.0 KB", "1.5 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency_strips_sign() {
        assert_eq!(format_currency(Money::from_cents(-124530)), "$1245.30");
        assert_eq!(format_currency(Money::from_cents(245075)), "$2450.75");
        assert_eq!(format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_signed_currency_for_negative_balance() {
        assert_eq!(
            format_signed_currency(Money::from_cents(-124530), "$"),
            "-$1245.30"
        );
        assert_eq!(format_signed_currency(Money::from_cents(120545), "$"), "$1205.45");
        assert_eq!(format_signed_currency(Money::from_cents(-99), "€"), "-€0.99");
    }

    #[test]
    fn test_relative_time_boundaries() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();

        assert_eq!(format_relative_time(&(now - Duration::seconds(59)), &now), "Just now");
        assert_eq!(format_relative_time(&(now - Duration::seconds(60)), &now), "1m ago");
        assert_eq!(format_relative_time(&(now - Duration::minutes(59)), &now), "59m ago");
        assert_eq!(format_relative_time(&(now - Duration::minutes(60)), &now), "1h ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(23)), &now), "23h ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();
        assert_eq!(format_relative_time(&(now - Duration::hours(24)), &now), "3/14/2025");
        assert_eq!(format_relative_time(&(now - Duration::days(70)), &now), "1/4/2025");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();
        assert_eq!(format_relative_time(&(now + Duration::hours(2)), &now), "Just now");
    }

    #[test]
    fn test_relative_date() {
        let today = date(2025, 3, 15);
        assert_eq!(format_relative_date(today, today), "Today");
        assert_eq!(format_relative_date(date(2025, 3, 16), today), "Tomorrow");
        assert_eq!(format_relative_date(date(2025, 3, 25), today), "Mar 25");
        assert_eq!(format_relative_date(date(2025, 3, 14), today), "Mar 14");
        assert_eq!(format_relative_date(date(2026, 1, 5), today), "Jan 5, 2026");
    }

    #[test]
    fn test_relative_date_across_year_end() {
        let today = date(2025, 12, 31);
        assert_eq!(format_relative_date(date(2026, 1, 1), today), "Tomorrow");
        assert_eq!(format_relative_date(date(2026, 1, 2), today), "Jan 2, 2026");
    }

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }
}
