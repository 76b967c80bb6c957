//! Ledger domain models and the in-memory transaction collection.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
