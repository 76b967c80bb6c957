use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::LedgerError;

/// The two-valued classification of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Canonical upper-case name used in the on-disk record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Matches case-insensitively against the canonical names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "INCOME" => Ok(TransactionKind::Income),
            "EXPENSE" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::UnknownKind(other.to_string())),
        }
    }
}

/// One immutable ledger entry. Entries carry no identity field; their
/// position in the ledger is their identity, and they are never edited
/// after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Builds a transaction, storing the category upper-cased.
    ///
    /// The amount's sign and the category's catalog membership are not
    /// validated here; the catalog is advisory at creation time only.
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into().trim().to_uppercase(),
            description: description.into(),
            date,
        }
    }
}
