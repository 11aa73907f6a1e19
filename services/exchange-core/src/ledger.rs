//! Per-user, per-asset balance ledger
//!
//! The ledger owns every user's portfolio. Cash ("USD") is an ordinary
//! asset entry; nothing in this layer privileges it. `BTreeMap` keying
//! keeps user and asset iteration alphabetical, which the reporting layer
//! relies on.

use std::collections::BTreeMap;
use types::errors::LedgerError;
use types::ids::{Symbol, UserId};

/// Balance ledger ("portfolios")
///
/// Invariant: no balance is ever negative. A withdrawal that would breach
/// this is rejected without mutation; the check and the debit observe the
/// same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    accounts: BTreeMap<UserId, BTreeMap<Symbol, i64>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Credit `amount` to the user's balance for `asset`, creating the
    /// user/asset entry if absent.
    ///
    /// No sign validation happens here; callers are trusted to pass
    /// non-negative amounts. A zero deposit still creates the entry.
    pub fn deposit(&mut self, user: &UserId, asset: &Symbol, amount: i64) {
        let balance = self
            .accounts
            .entry(user.clone())
            .or_default()
            .entry(asset.clone())
            .or_insert(0);
        *balance += amount;
    }

    /// Current balance, if the user holds an entry for the asset
    pub fn balance(&self, user: &UserId, asset: &Symbol) -> Option<i64> {
        self.accounts.get(user)?.get(asset).copied()
    }

    /// Pure affordability predicate
    ///
    /// True iff the user has an entry for the asset and
    /// `balance - amount >= 0`. False for unknown user or unknown asset.
    pub fn can_withdraw(&self, user: &UserId, asset: &Symbol, amount: i64) -> bool {
        self.check_withdrawal(user, asset, amount).is_ok()
    }

    /// Typed affordability check; never mutates
    pub fn check_withdrawal(
        &self,
        user: &UserId,
        asset: &Symbol,
        amount: i64,
    ) -> Result<(), LedgerError> {
        let assets = self.accounts.get(user).ok_or_else(|| LedgerError::UnknownAccount {
            user: user.to_string(),
        })?;
        let balance = assets.get(asset).copied().ok_or_else(|| LedgerError::UnknownAsset {
            user: user.to_string(),
            asset: asset.to_string(),
        })?;
        if balance - amount < 0 {
            return Err(LedgerError::InsufficientBalance {
                user: user.to_string(),
                asset: asset.to_string(),
                required: amount,
                available: balance,
            });
        }
        Ok(())
    }

    /// Debit `amount` from the user's balance for `asset`
    ///
    /// Check and debit happen against the same balance reference, so no
    /// stale-read window exists between them.
    pub fn withdraw(&mut self, user: &UserId, asset: &Symbol, amount: i64) -> Result<(), LedgerError> {
        let assets = self.accounts.get_mut(user).ok_or_else(|| LedgerError::UnknownAccount {
            user: user.to_string(),
        })?;
        let balance = assets.get_mut(asset).ok_or_else(|| LedgerError::UnknownAsset {
            user: user.to_string(),
            asset: asset.to_string(),
        })?;
        if *balance - amount < 0 {
            return Err(LedgerError::InsufficientBalance {
                user: user.to_string(),
                asset: asset.to_string(),
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    /// Alphabetical iteration over every account and its balances
    pub fn accounts(&self) -> impl Iterator<Item = (&UserId, &BTreeMap<Symbol, i64>)> {
        self.accounts.iter()
    }

    /// Alphabetical iteration over user identities
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.accounts.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserId {
        UserId::new(name)
    }

    fn asset(symbol: &str) -> Symbol {
        Symbol::new(symbol)
    }

    #[test]
    fn test_deposit_creates_and_accumulates() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Nahum"), &asset("BTC"), 1000);
        ledger.deposit(&user("Nahum"), &asset("BTC"), 50);

        assert_eq!(ledger.balance(&user("Nahum"), &asset("BTC")), Some(1050));
    }

    #[test]
    fn test_zero_deposit_creates_entry() {
        let mut ledger = Ledger::new();
        assert!(!ledger.can_withdraw(&user("Ofria"), &asset("ETH"), 0));

        ledger.deposit(&user("Ofria"), &asset("ETH"), 0);

        assert_eq!(ledger.balance(&user("Ofria"), &asset("ETH")), Some(0));
        assert!(ledger.can_withdraw(&user("Ofria"), &asset("ETH"), 0));
    }

    #[test]
    fn test_can_withdraw_unknown_user_and_asset() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Nahum"), &asset("BTC"), 10);

        assert!(!ledger.can_withdraw(&user("Ghost"), &asset("BTC"), 1));
        assert!(!ledger.can_withdraw(&user("Nahum"), &asset("ETH"), 1));
        assert!(ledger.can_withdraw(&user("Nahum"), &asset("BTC"), 10));
        assert!(!ledger.can_withdraw(&user("Nahum"), &asset("BTC"), 11));
    }

    #[test]
    fn test_withdraw_debits() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Dolson"), &asset("USD"), 555555);

        ledger.withdraw(&user("Dolson"), &asset("USD"), 950).unwrap();
        assert_eq!(ledger.balance(&user("Dolson"), &asset("USD")), Some(554605));
    }

    #[test]
    fn test_withdraw_rejection_leaves_balance_untouched() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Zaabar"), &asset("LTC"), 10);

        let err = ledger.withdraw(&user("Zaabar"), &asset("LTC"), 11).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                user: "Zaabar".to_string(),
                asset: "LTC".to_string(),
                required: 11,
                available: 10,
            }
        );
        assert_eq!(ledger.balance(&user("Zaabar"), &asset("LTC")), Some(10));
    }

    #[test]
    fn test_withdraw_to_exactly_zero() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Nahum"), &asset("BTC"), 5);

        ledger.withdraw(&user("Nahum"), &asset("BTC"), 5).unwrap();
        assert_eq!(ledger.balance(&user("Nahum"), &asset("BTC")), Some(0));
    }

    #[test]
    fn test_accounts_iterate_alphabetically() {
        let mut ledger = Ledger::new();
        ledger.deposit(&user("Zaabar"), &asset("USD"), 1);
        ledger.deposit(&user("Dolson"), &asset("USD"), 1);
        ledger.deposit(&user("Nahum"), &asset("USD"), 1);

        let names: Vec<&str> = ledger.users().map(|u| u.as_str()).collect();
        assert_eq!(names, vec!["Dolson", "Nahum", "Zaabar"]);
    }
}
