//! Strongly-typed ID wrappers
//!
//! Newtype wrappers keep account, bill and statement IDs from being mixed up
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form shown in tables (`acc-1a2b3c4d`)
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// Whether `s` is this ID's short form or a prefix of its UUID
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim().to_lowercase();
                let bare = s.strip_prefix($display_prefix).unwrap_or(&s);
                bare.len() >= 4 && self.0.simple().to_string().starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(BillId, "bil-");
define_id!(StatementId, "stm-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = AccountId::new();
        let display = id.to_string();
        assert!(display.starts_with("acc-"));
        assert_eq!(display.len(), 12);

        assert!(BillId::new().to_string().starts_with("bil-"));
        assert!(StatementId::new().to_string().starts_with("stm-"));
    }

    #[test]
    fn test_id_serialization() {
        let id = BillId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: BillId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_parse_full_and_prefixed() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: AccountId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: AccountId = format!("acc-{}", uuid_str).parse().unwrap();
        assert_eq!(id, prefixed);

        assert!("acc-550e8400".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_matches_short_form() {
        let id = AccountId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap());
        assert!(id.matches("acc-550e8400"));
        assert!(id.matches("550E8400"));
        assert!(!id.matches("acc-5"));
        assert!(!id.matches("acc-deadbeef"));
    }
}
