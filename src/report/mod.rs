//! Reporting over ledger snapshots.
//!
//! Every function here is pure: it reads a slice of transactions and
//! recomputes its result on each call. The ledger is small enough that no
//! caching layer is warranted.

use std::collections::HashMap;

use chrono::Datelike;

use crate::ledger::{Transaction, TransactionKind};

/// Income, expense, and net totals over one transaction subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

/// All transactions whose date falls in the given month and year, in
/// input order.
pub fn monthly_filter(transactions: &[Transaction], month: u32, year: i32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.month() == month && t.date.year() == year)
        .cloned()
        .collect()
}

/// Sum of amounts over transactions of the given kind; 0 if none match.
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Total income minus total expense.
pub fn net_amount(transactions: &[Transaction]) -> f64 {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Income, expense, and net totals in one pass-friendly bundle.
pub fn monthly_summary(transactions: &[Transaction]) -> MonthlySummary {
    let total_income = total_by_kind(transactions, TransactionKind::Income);
    let total_expense = total_by_kind(transactions, TransactionKind::Expense);
    MonthlySummary {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

/// Per-category summed amounts for the given kind, sorted descending by
/// total. Equal totals fall back to category name ascending so the output
/// is deterministic. Categories with no matching transaction are absent.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    let mut breakdown: Vec<(String, f64)> = totals.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// The full list sorted descending by date. The sort is stable, so
/// same-date entries keep their original relative order.
pub fn sorted_descending_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The `limit` most recent transactions, newest first, with the same
/// stable tie-break as [`sorted_descending_by_date`].
pub fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = sorted_descending_by_date(transactions);
    sorted.truncate(limit);
    sorted
}
