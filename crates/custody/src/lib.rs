//! Stipend Custody - the shared custodial pool
//!
//! Approved claims are paid from a single shared balance. The registry
//! talks to it through the [`CustodyLedger`] trait; [`PooledCustody`] is
//! the in-process implementation.

pub mod error;
pub mod ledger;
pub mod pool;

pub use error::CustodyError;
pub use ledger::CustodyLedger;
pub use pool::PooledCustody;
