use super::transaction::TransactionKind;

/// Categories suggested for income entries, in presentation order.
const INCOME_CATEGORIES: &[&str] = &["SALARY", "BUSINESS", "FREELANCING", "INVESTMENT", "OTHER"];

/// Categories suggested for expense entries, in presentation order.
const EXPENSE_CATEGORIES: &[&str] = &[
    "FOOD",
    "RENT",
    "TRAVEL",
    "UTILITIES",
    "ENTERTAINMENT",
    "HEALTHCARE",
    "OTHER",
];

/// Returns the catalog labels for a kind, in presentation order.
///
/// The catalog is advisory: transactions loaded from files may carry
/// categories outside this list and are accepted as-is.
pub fn labels(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}
