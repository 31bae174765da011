//! In-memory custodial pool

use crate::error::CustodyError;
use crate::ledger::CustodyLedger;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stipend_core::{Amount, Principal};

/// A single shared custodial balance plus per-recipient payout totals.
///
/// Serializable so an embedder can snapshot and restore it across runs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PooledCustody {
    balance: Amount,
    paid_out: HashMap<Principal, Amount>,
}

impl PooledCustody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the pool (administrative funding path)
    pub fn fund(&mut self, amount: Amount) {
        // Decimal addition on two non-negative amounts; saturate at the
        // current balance if the sum is unrepresentable.
        self.balance = self.balance.checked_add(amount).unwrap_or(self.balance);
    }

    /// Total amount ever transferred to `who`
    pub fn paid_to(&self, who: &Principal) -> Amount {
        self.paid_out.get(who).copied().unwrap_or(Amount::ZERO)
    }
}

impl CustodyLedger for PooledCustody {
    fn balance(&self) -> Amount {
        self.balance
    }

    fn transfer(&mut self, to: &Principal, amount: Amount) -> Result<(), CustodyError> {
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(CustodyError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            })?;

        self.balance = remaining;
        let total = self.paid_to(to).checked_add(amount).unwrap_or(amount);
        self.paid_out.insert(to.clone(), total);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn amount(val: i64) -> Amount {
        Amount::new(Decimal::new(val, 0)).unwrap()
    }

    #[test]
    fn test_fund_then_transfer() {
        let mut pool = PooledCustody::new();
        pool.fund(amount(500));
        assert_eq!(pool.balance(), amount(500));

        let alice = Principal::new("alice");
        pool.transfer(&alice, amount(200)).unwrap();

        assert_eq!(pool.balance(), amount(300));
        assert_eq!(pool.paid_to(&alice), amount(200));
    }

    #[test]
    fn test_overdraw_leaves_pool_untouched() {
        let mut pool = PooledCustody::new();
        pool.fund(amount(100));

        let alice = Principal::new("alice");
        let result = pool.transfer(&alice, amount(150));

        assert!(matches!(
            result,
            Err(CustodyError::InsufficientFunds { .. })
        ));
        assert_eq!(pool.balance(), amount(100));
        assert_eq!(pool.paid_to(&alice), Amount::ZERO);
    }

    #[test]
    fn test_payouts_accumulate_per_recipient() {
        let mut pool = PooledCustody::new();
        pool.fund(amount(1000));

        let alice = Principal::new("alice");
        let bob = Principal::new("bob");
        pool.transfer(&alice, amount(100)).unwrap();
        pool.transfer(&alice, amount(50)).unwrap();
        pool.transfer(&bob, amount(25)).unwrap();

        assert_eq!(pool.paid_to(&alice), amount(150));
        assert_eq!(pool.paid_to(&bob), amount(25));
        assert_eq!(pool.balance(), amount(825));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut pool = PooledCustody::new();
        pool.fund(amount(400));
        pool.transfer(&Principal::new("alice"), amount(100)).unwrap();

        let json = serde_json::to_string(&pool).unwrap();
        let restored: PooledCustody = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.balance(), amount(300));
        assert_eq!(restored.paid_to(&Principal::new("alice")), amount(100));
    }
}
