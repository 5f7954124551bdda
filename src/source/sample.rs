//! Sample ledger used by `init` and the in-memory source
//!
//! Dates and sync times are offsets from the supplied clock so the sample
//! always reads as current.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{Account, AccountStatus, AccountType, Bill, BillFrequency, BillStatus, Money};

fn days_from(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_add_signed(Duration::days(days))
        .unwrap_or(today)
}

/// Five accounts, one of each type
pub fn sample_accounts(now: DateTime<Utc>) -> Vec<Account> {
    vec![
        Account::new("Chase Total Checking", AccountType::Checking, "Chase", now)
            .with_balance(Money::from_cents(245_075))
            .with_account_number("4521")
            .with_color("#1E88E5")
            .connected(now - Duration::minutes(5)),
        Account::new("High Yield Savings", AccountType::Savings, "Ally Bank", now)
            .with_balance(Money::from_cents(1_250_000))
            .with_account_number("8832")
            .with_color("#43A047")
            .connected(now - Duration::hours(2)),
        Account::new("Sapphire Preferred", AccountType::Credit, "Chase", now)
            .with_balance(Money::from_cents(-124_530))
            .with_account_number("9012")
            .with_color("#3949AB")
            .connected(now - Duration::minutes(30)),
        Account::new("Brokerage", AccountType::Investment, "Vanguard", now)
            .with_balance(Money::from_cents(4_523_018))
            .with_account_number("3345")
            .with_color("#8E24AA")
            .connected(now - Duration::days(1)),
        Account {
            status: AccountStatus::Pending,
            ..Account::new("Auto Loan", AccountType::Loan, "Capital One", now - Duration::days(3))
                .with_balance(Money::from_cents(-1_520_000))
                .with_account_number("7781")
                .with_color("#E53935")
        },
    ]
}

/// Eight bills spread across every status and frequency
pub fn sample_bills(today: NaiveDate) -> Vec<Bill> {
    let gym_paid = days_from(today, -10);

    vec![
        Bill::new("Rent", "Housing", Money::from_cents(185_000), days_from(today, 5))
            .with_merchant("Parkview Apartments"),
        Bill::new("Electric Bill", "Utilities", Money::from_cents(12_450), today)
            .with_status(BillStatus::DueToday)
            .with_merchant("City Power & Light"),
        Bill::new("Internet", "Internet", Money::from_cents(7_999), days_from(today, -3))
            .with_status(BillStatus::Overdue)
            .with_merchant("Comcast"),
        Bill::new("Netflix", "Entertainment", Money::from_cents(1_549), days_from(today, 12))
            .with_auto_pay(true),
        Bill::new("Car Insurance", "Insurance", Money::from_cents(64_200), days_from(today, 40))
            .with_frequency(BillFrequency::Quarterly)
            .with_merchant("Geico"),
        Bill {
            last_paid: Some(gym_paid),
            next_due: BillFrequency::Monthly.advance(gym_paid),
            ..Bill::new("Gym Membership", "Fitness", Money::from_cents(4_999), gym_paid)
                .with_status(BillStatus::Paid)
                .with_auto_pay(true)
        },
        Bill::new("Amazon Prime", "Subscriptions", Money::from_cents(13_900), days_from(today, 90))
            .with_frequency(BillFrequency::Yearly),
        Bill::new("Lawn Care", "Home Services", Money::from_cents(3_500), days_from(today, 2))
            .with_frequency(BillFrequency::Weekly)
            .with_description("Every Saturday morning"),
    ]
}
