use super::transaction::Transaction;

/// The in-memory ordered collection of all transactions for the session.
///
/// Owned by the caller and passed by reference into storage and reporting
/// operations; there is no hidden process-wide state. Append-only: entries
/// keep the order they were added in, across loads and manual additions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one transaction at the end. O(1).
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Current entries in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
