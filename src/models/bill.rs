//! Bill model
//!
//! A recurring or one-time payment obligation. Status is assigned by whoever
//! supplies the bill; nothing in this crate derives it from dates.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::BillId;
use super::money::Money;
use crate::error::LedgerError;

/// How often a bill repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillFrequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillFrequency {
    /// The next occurrence after `date`
    ///
    /// Month-based frequencies clamp to the last day of shorter months
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(&self, date: NaiveDate) -> NaiveDate {
        let next = match self {
            Self::Weekly => date.checked_add_signed(Duration::days(7)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Quarterly => date.checked_add_months(Months::new(3)),
            Self::Yearly => date.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(NaiveDate::MAX)
    }
}

impl FromStr for BillFrequency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(LedgerError::invalid_enum("bill frequency", s)),
        }
    }
}

impl fmt::Display for BillFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Payment status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    #[default]
    Upcoming,
    DueToday,
    Overdue,
    Paid,
}

impl BillStatus {
    pub const ALL: [BillStatus; 4] = [Self::Upcoming, Self::DueToday, Self::Overdue, Self::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::DueToday => "due_today",
            Self::Overdue => "overdue",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for BillStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "due_today" => Ok(Self::DueToday),
            "overdue" => Ok(Self::Overdue),
            "paid" => Ok(Self::Paid),
            _ => Err(LedgerError::invalid_enum("bill status", s)),
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Upcoming"),
            Self::DueToday => write!(f, "Due Today"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// A payment obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,

    pub name: String,

    /// Free-form category (e.g., "Utilities", "Housing")
    pub category: String,

    /// Amount due; never negative
    pub amount: Money,

    pub due_date: NaiveDate,

    #[serde(default)]
    pub frequency: BillFrequency,

    #[serde(default)]
    pub status: BillStatus,

    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_paid: Option<NaiveDate>,

    pub next_due: NaiveDate,

    #[serde(default)]
    pub auto_pay: bool,
}

impl Bill {
    /// Create an upcoming monthly recurring bill due on `due_date`
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            category: category.into(),
            amount,
            due_date,
            frequency: BillFrequency::Monthly,
            status: BillStatus::Upcoming,
            is_recurring: true,
            merchant: None,
            description: None,
            last_paid: None,
            next_due: due_date,
            auto_pay: false,
        }
    }

    pub fn with_frequency(mut self, frequency: BillFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_status(mut self, status: BillStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_auto_pay(mut self, auto_pay: bool) -> Self {
        self.auto_pay = auto_pay;
        self
    }

    pub fn one_time(mut self) -> Self {
        self.is_recurring = false;
        self
    }

    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }

    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(BillValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, due {})", self.name, self.status, self.due_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NegativeAmount => write!(f, "Bill amount cannot be negative"),
        }
    }
}

impl std::error::Error for BillValidationError {}
