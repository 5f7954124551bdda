//! Name and ID lookup over account and bill snapshots
//!
//! Lookups try, in order: a case-insensitive name match, a full ID (with or
//! without its `acc-`/`bil-` prefix), then a short ID prefix that matches
//! exactly one record. When several records share a name the first one in
//! slice order wins, so callers pass a snapshot in a stable order.

use std::str::FromStr;

use crate::models::{Account, AccountId, Bill, BillId};

fn find_by<'a, T, I>(
    items: &'a [T],
    identifier: &str,
    name: impl Fn(&T) -> &str,
    id: impl Fn(&T) -> I,
    matches: impl Fn(&T, &str) -> bool,
) -> Option<&'a T>
where
    I: FromStr + PartialEq,
{
    let wanted = identifier.trim();
    if wanted.is_empty() {
        return None;
    }

    if let Some(item) = items.iter().find(|item| name(*item).eq_ignore_ascii_case(wanted)) {
        return Some(item);
    }

    if let Ok(full) = wanted.parse::<I>() {
        return items.iter().find(|item| id(*item) == full);
    }

    let mut hits = items.iter().filter(|item| matches(*item, wanted));
    match (hits.next(), hits.next()) {
        (Some(item), None) => Some(item),
        _ => None,
    }
}

/// Find an account by name, full ID or unique short ID
pub fn find_account<'a>(accounts: &'a [Account], identifier: &str) -> Option<&'a Account> {
    find_by::<_, AccountId>(
        accounts,
        identifier,
        |a| a.name.as_str(),
        |a| a.id,
        |a, s| a.id.matches(s),
    )
}

/// Find a bill by name, full ID or unique short ID
pub fn find_bill<'a>(bills: &'a [Bill], identifier: &str) -> Option<&'a Bill> {
    find_by::<_, BillId>(
        bills,
        identifier,
        |b| b.name.as_str(),
        |b| b.id,
        |b, s| b.id.matches(s),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::{account, bill};
    use crate::models::{AccountType, BillStatus};

    #[test]
    fn test_find_account_by_name_full_and_short_id() {
        let accounts = vec![
            account("Everyday Checking", AccountType::Checking, 245075),
            account("Sapphire Preferred", AccountType::Credit, -124530),
        ];
        let visa = &accounts[1];

        assert_eq!(find_account(&accounts, " sapphire PREFERRED ").unwrap().id, visa.id);
        assert_eq!(find_account(&accounts, &visa.id.as_uuid().to_string()).unwrap().id, visa.id);
        assert_eq!(
            find_account(&accounts, &format!("acc-{}", visa.id.as_uuid())).unwrap().id,
            visa.id
        );
        assert_eq!(find_account(&accounts, &visa.id.short()).unwrap().id, visa.id);
        assert!(find_account(&accounts, "Amex").is_none());
        assert!(find_account(&accounts, "  ").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_in_order() {
        let bills = vec![
            bill("Water", 4500, BillStatus::Upcoming),
            bill("Water", 5200, BillStatus::Overdue),
        ];

        for _ in 0..10 {
            assert_eq!(find_bill(&bills, "water").unwrap().id, bills[0].id);
        }
    }

    #[test]
    fn test_unknown_full_id_is_none() {
        let bills = vec![bill("Rent", 185000, BillStatus::Upcoming)];
        assert!(find_bill(&bills, "bil-550e8400-e29b-41d4-a716-446655440000").is_none());
    }
}
