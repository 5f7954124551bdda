//! Label and icon lookups for list views
//!
//! Closed enums map exhaustively. Free-form or unparseable input falls back
//! to a default instead of failing, since these only affect presentation.

use crate::models::{AccountStatus, AccountType, BillFrequency, BillStatus};

pub const DEFAULT_CATEGORY_ICON: &str = "🧾";
pub const UNKNOWN_LABEL: &str = "Unknown";

pub fn account_type_icon(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Checking => "🏦",
        AccountType::Savings => "💰",
        AccountType::Credit => "💳",
        AccountType::Investment => "📈",
        AccountType::Loan => "🏠",
    }
}

pub fn account_status_icon(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "●",
        AccountStatus::Inactive => "○",
        AccountStatus::Pending => "◌",
    }
}

pub fn bill_status_icon(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Upcoming => "⏳",
        BillStatus::DueToday => "⚠",
        BillStatus::Overdue => "❗",
        BillStatus::Paid => "✔",
    }
}

pub fn frequency_label(frequency: BillFrequency) -> &'static str {
    match frequency {
        BillFrequency::Weekly => "Weekly",
        BillFrequency::Monthly => "Monthly",
        BillFrequency::Quarterly => "Quarterly",
        BillFrequency::Yearly => "Yearly",
    }
}

/// Icon for a free-form bill category
pub fn category_icon(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "utilities" | "electric" | "electricity" | "water" | "gas" => "💡",
        "housing" | "rent" | "mortgage" => "🏠",
        "entertainment" | "streaming" => "🎬",
        "insurance" => "🛡",
        "phone" | "internet" | "mobile" => "📱",
        "health" | "fitness" | "medical" => "💪",
        "transportation" | "auto" | "car" => "🚗",
        "subscriptions" | "software" => "🔁",
        "credit card" | "loan" | "debt" => "💳",
        "education" => "🎓",
        _ => DEFAULT_CATEGORY_ICON,
    }
}

/// Display label for a raw account type string
pub fn account_type_label(raw: &str) -> String {
    raw.parse::<AccountType>()
        .map(|t| t.to_string())
        .unwrap_or_else(|_| UNKNOWN_LABEL.to_string())
}

/// Display label for a raw bill status string
pub fn bill_status_label(raw: &str) -> String {
    raw.parse::<BillStatus>()
        .map(|s| s.to_string())
        .unwrap_or_else(|_| UNKNOWN_LABEL.to_string())
}
