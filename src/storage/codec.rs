use crate::errors::{LedgerError, Result};
use crate::ledger::Transaction;

/// Number of comma-separated fields in one record line.
const FIELD_COUNT: usize = 5;

/// Encodes a transaction as one record line:
/// `KIND,AMOUNT,CATEGORY,DESCRIPTION,DATE`.
///
/// The amount is written with exactly two decimal digits and the date as
/// `YYYY-MM-DD`. The description is written raw; a comma inside it makes
/// the line ambiguous on decode. That matches the legacy data files this
/// crate must round-trip, so no escaping is applied.
pub fn encode(transaction: &Transaction) -> String {
    format!(
        "{},{:.2},{},{},{}",
        transaction.kind,
        transaction.amount,
        transaction.category,
        transaction.description,
        transaction.date.format("%Y-%m-%d")
    )
}

/// Decodes one record line into a transaction.
///
/// The line is split into at most five comma-separated parts and every
/// field is trimmed. The category is upper-cased but not checked against
/// the catalog. Blank and `#`-comment lines are the caller's concern and
/// must be filtered out before this point.
pub fn decode(line: &str) -> Result<Transaction> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if parts.len() != FIELD_COUNT {
        return Err(LedgerError::MalformedRecord {
            line: line.to_string(),
        });
    }

    let kind = parts[0].trim().parse()?;
    let amount_field = parts[1].trim();
    let amount: f64 = amount_field
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(amount_field.to_string()))?;
    let category = parts[2].trim().to_uppercase();
    let description = parts[3].trim().to_string();
    let date_field = parts[4].trim();
    let date = chrono::NaiveDate::parse_from_str(date_field, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(date_field.to_string()))?;

    Ok(Transaction {
        kind,
        amount,
        category,
        description,
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionKind::Income,
            5000.0,
            "SALARY",
            "Monthly salary",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn encode_produces_the_record_format() {
        assert_eq!(encode(&sample()), "INCOME,5000.00,SALARY,Monthly salary,2024-01-15");
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let original = sample();
        let decoded = decode(&encode(&original)).expect("decode encoded line");
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_trims_whitespace_and_upper_cases() {
        let decoded = decode(" income , 12.5 , food , snacks , 2024-02-01 ").unwrap();
        assert_eq!(decoded.kind, TransactionKind::Income);
        assert_eq!(decoded.amount, 12.5);
        assert_eq!(decoded.category, "FOOD");
        assert_eq!(decoded.description, "snacks");
    }

    #[test]
    fn off_catalog_category_is_accepted() {
        let decoded = decode("EXPENSE,10.00,GIFTS,birthday,2024-03-03").unwrap();
        assert_eq!(decoded.category, "GIFTS");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = decode("INCOME,5000.00,SALARY,2024-01-15").unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRecord { .. }));
    }

    #[test]
    fn unknown_kind_is_reported() {
        let err = decode("REFUND,10.00,OTHER,desc,2024-01-15").unwrap_err();
        assert!(matches!(err, LedgerError::UnknownKind(_)));
    }

    #[test]
    fn non_numeric_amount_is_reported() {
        let err = decode("INCOME,lots,SALARY,desc,2024-01-15").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(value) if value == "lots"));
    }

    #[test]
    fn bad_date_is_reported() {
        let err = decode("INCOME,10.00,SALARY,desc,15/01/2024").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate(_)));
    }

    #[test]
    fn comma_in_description_shifts_the_date_boundary() {
        // Known legacy limitation: the limited split absorbs the extra
        // comma into the date field, which then fails to parse.
        let err = decode("EXPENSE,20.00,FOOD,bread, milk,2024-01-15").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate(_)));
    }

    #[test]
    fn empty_description_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let original = Transaction::new(TransactionKind::Expense, 7.0, "TRAVEL", "", date);
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn negative_amount_is_accepted_on_decode() {
        let decoded = decode("EXPENSE,-5.00,OTHER,refund gone wrong,2024-01-15").unwrap();
        assert_eq!(decoded.amount, -5.0);
    }
}
