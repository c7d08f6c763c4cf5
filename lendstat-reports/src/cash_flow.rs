//! Cash movements in and out of the account.

use lendstat_core::{DATE_FORMAT, LedgerEntry};

use crate::row::{Row, money};

/// One `(date, amount)` row per deposit, in ledger order, no aggregation.
pub fn cash_flow(entries: &[LedgerEntry]) -> Vec<Row> {
    entries
        .iter()
        .filter_map(|entry| {
            entry.cash_deposited().map(|amount| {
                vec![entry.date.format(DATE_FORMAT).to_string(), money(amount)]
            })
        })
        .collect()
}
