//! All-time totals and the fee ledger.

use lendstat_core::{DATE_FORMAT, LedgerEntry, RunningTotals};

use crate::row::{Row, money};

/// All-time account statement: one pass, four labeled rows.
pub fn all_time(entries: &[LedgerEntry]) -> Vec<Row> {
    let mut totals = RunningTotals::default();
    for entry in entries {
        totals.apply(entry);
    }

    vec![
        vec![money(totals.cash_in_game), "Cash in game".to_string()],
        vec![money(totals.interest), "Total interests received".to_string()],
        vec![money(totals.charges), "Total charges received".to_string()],
        vec![money(totals.fees), "Total fees paid".to_string()],
    ]
}

/// Fee ledger: one row per fee-carrying entry in ledger order, then the
/// running total.
pub fn fees_paid(entries: &[LedgerEntry]) -> Vec<Row> {
    let mut total = 0.0;
    let mut rows = Vec::new();

    for entry in entries {
        if let Some(fee) = entry.fee() {
            rows.push(vec![money(fee), entry.date.format(DATE_FORMAT).to_string()]);
            total += fee;
        }
    }

    rows.push(vec![money(total), "Total fees paid".to_string()]);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lendstat_core::Category;

    fn entry(date: &str, label: &str, amount: f64) -> LedgerEntry {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap();
        LedgerEntry::new(date, label, amount)
    }

    #[test]
    fn test_all_time_rows() {
        let ledger = [
            entry("01/01/2020", "Deposit", 100.0),
            entry("15/01/2020", "Interest", 5.0),
            entry("01/02/2020", "Interest", 3.0),
        ];

        let rows = all_time(&ledger);
        assert_eq!(
            rows,
            vec![
                vec!["108.00".to_string(), "Cash in game".to_string()],
                vec!["8.00".to_string(), "Total interests received".to_string()],
                vec!["0.00".to_string(), "Total charges received".to_string()],
                vec!["0.00".to_string(), "Total fees paid".to_string()],
            ]
        );
    }

    #[test]
    fn test_all_time_empty_ledger() {
        let rows = all_time(&[]);
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row[0], "0.00");
        }
    }

    #[test]
    fn test_fees_paid_is_total_only_for_parsed_ledgers() {
        // No exported label classifies as Fee, so a parsed ledger yields
        // just the total row.
        let ledger = [
            entry("01/01/2020", "Deposit", 100.0),
            entry("15/01/2020", "Interest", 5.0),
        ];

        let rows = fees_paid(&ledger);
        assert_eq!(
            rows,
            vec![vec!["0.00".to_string(), "Total fees paid".to_string()]]
        );
    }

    #[test]
    fn test_fees_paid_lists_fee_entries() {
        let mut fee = entry("31/01/2020", "Servicing fee", -1.5);
        fee.category = Category::Fee;

        let ledger = [entry("01/01/2020", "Deposit", 100.0), fee];

        let rows = fees_paid(&ledger);
        assert_eq!(
            rows,
            vec![
                vec!["-1.50".to_string(), "31/01/2020".to_string()],
                vec!["-1.50".to_string(), "Total fees paid".to_string()],
            ]
        );
    }
}
