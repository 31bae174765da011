//! Custody ledger trait - the value-transfer seam

use crate::error::CustodyError;
use stipend_core::{Amount, Principal};

/// Tracks the available pool balance and moves value to a recipient.
///
/// `transfer` is atomic: either the full amount leaves the pool or nothing
/// does. Callers that need check-then-transfer atomicity against other
/// callers must serialize access to the ledger themselves; the registry
/// does so by holding its single mutable borrow across the whole claim.
pub trait CustodyLedger {
    /// Current available balance of the pool
    fn balance(&self) -> Amount;

    /// Move `amount` from the pool to `to`, failing without any effect if
    /// the balance is insufficient.
    fn transfer(&mut self, to: &Principal, amount: Amount) -> Result<(), CustodyError>;
}
