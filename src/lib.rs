#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the transaction model, flat-file persistence, and
//! monthly reporting primitives behind interactive expense-tracking shells.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Expense Core tracing initialized.");
    });
}
