//! Flat-file persistence for the ledger.

pub mod codec;
pub mod text_backend;

pub use text_backend::{LedgerStore, LineError, LoadReport};
