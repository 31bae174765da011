//! Custody errors

use stipend_core::Amount;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustodyError {
    #[error("Insufficient pool balance: needed {needed}, available {available}")]
    InsufficientFunds { needed: Amount, available: Amount },
}
