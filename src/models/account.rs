//! Account model
//!
//! Represents financial holdings (checking, savings, investment) and
//! liabilities (credit cards, loans). Liability balances are stored negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::AccountId;
use super::money::Money;
use crate::error::LedgerError;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
    Investment,
    Loan,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        Self::Checking,
        Self::Savings,
        Self::Credit,
        Self::Investment,
        Self::Loan,
    ];

    /// Credit cards and loans carry debt; their balances are negative
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit | Self::Loan)
    }

    pub fn is_asset(&self) -> bool {
        !self.is_liability()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Investment => "investment",
            Self::Loan => "loan",
        }
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Ok(Self::Credit),
            "investment" | "brokerage" => Ok(Self::Investment),
            "loan" | "mortgage" => Ok(Self::Loan),
            _ => Err(LedgerError::invalid_enum("account type", s)),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
            Self::Loan => write!(f, "Loan"),
        }
    }
}

/// Connection status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl FromStr for AccountStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(LedgerError::invalid_enum("account status", s)),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A tracked financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Display name (e.g., "Chase Checking")
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Signed balance; negative for credit and loan accounts
    pub balance: Money,

    /// ISO currency code
    pub currency: String,

    pub institution: String,

    /// Masked account number (e.g., "****4521")
    pub account_number: String,

    /// Whether the account is linked to its institution for syncing
    pub is_connected: bool,

    pub last_synced: DateTime<Utc>,

    #[serde(default)]
    pub status: AccountStatus,

    /// Optional display color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Account {
    /// Create a disconnected account with a zero balance
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        institution: impl Into<String>,
        last_synced: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance: Money::zero(),
            currency: "USD".to_string(),
            institution: institution.into(),
            account_number: String::new(),
            is_connected: false,
            last_synced,
            status: AccountStatus::Pending,
            color: None,
        }
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Store the last four digits of `number` behind a mask
    pub fn with_account_number(mut self, number: &str) -> Self {
        self.account_number = mask_account_number(number);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the account as linked and freshly synced
    pub fn connected(mut self, at: DateTime<Utc>) -> Self {
        self.is_connected = true;
        self.status = AccountStatus::Active;
        self.last_synced = at;
        self
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.account_type.is_liability() && self.balance.is_positive() {
            return Err(AccountValidationError::LiabilityBalancePositive);
        }

        if self.account_type.is_asset() && self.balance.is_negative() {
            return Err(AccountValidationError::AssetBalanceNegative);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Keep only the last four digits: "1234567890" -> "****7890"
pub fn mask_account_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    LiabilityBalancePositive,
    AssetBalanceNegative,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::LiabilityBalancePositive => {
                write!(f, "Credit and loan balances must be zero or negative")
            }
            Self::AssetBalanceNegative => {
                write!(f, "Checking, savings and investment balances cannot be negative")
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn synced() -> DateTime<Utc> {
        "2025-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_new_account() {
        let account = Account::new("Chase Checking", AccountType::Checking, "Chase", synced());
        assert_eq!(account.name, "Chase Checking");
        assert_eq!(account.balance, Money::zero());
        assert!(!account.is_connected);
        assert_eq!(account.status, AccountStatus::Pending);
    }

    #[test]
    fn test_connected_builder() {
        let later: DateTime<Utc> = "2025-03-02T08:00:00Z".parse().unwrap();
        let account = Account::new("Savings", AccountType::Savings, "Ally", synced()).connected(later);
        assert!(account.is_connected);
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.last_synced, later);
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", AccountType::Checking, "Chase", synced());
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_balance_sign_invariant() {
        let card = Account::new("Visa", AccountType::Credit, "Chase", synced())
            .with_balance(Money::from_cents(500));
        assert_eq!(
            card.validate(),
            Err(AccountValidationError::LiabilityBalancePositive)
        );

        let checking = Account::new("Checking", AccountType::Checking, "Chase", synced())
            .with_balance(Money::from_cents(-1));
        assert_eq!(
            checking.validate(),
            Err(AccountValidationError::AssetBalanceNegative)
        );

        let loan = Account::new("Car Loan", AccountType::Loan, "Toyota", synced())
            .with_balance(Money::from_cents(-1_500_000));
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!("checking".parse::<AccountType>().unwrap(), AccountType::Checking);
        assert_eq!("SAVINGS".parse::<AccountType>().unwrap(), AccountType::Savings);
        assert_eq!("credit_card".parse::<AccountType>().unwrap(), AccountType::Credit);
        assert!(matches!(
            "crypto".parse::<AccountType>(),
            Err(LedgerError::InvalidEnumValue { kind: "account type", .. })
        ));
    }

    #[test]
    fn test_liability_partition() {
        let liabilities: Vec<_> = AccountType::ALL
            .iter()
            .filter(|t| t.is_liability())
            .collect();
        assert_eq!(liabilities, vec![&AccountType::Credit, &AccountType::Loan]);
    }

    #[test]
    fn test_mask_account_number() {
        assert_eq!(mask_account_number("1234-5678-9012-4521"), "****4521");
        assert_eq!(mask_account_number("12"), "****12");
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let account = Account::new("Test", AccountType::Investment, "Vanguard", synced());
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "investment");
        assert!(json.get("color").is_none());

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_display() {
        let account = Account::new("Amex Gold", AccountType::Credit, "Amex", synced());
        assert_eq!(account.to_string(), "Amex Gold (Credit Card)");
    }
}
