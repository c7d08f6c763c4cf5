//! Statement for one target calendar month.

use anyhow::{Result, bail};
use lendstat_core::{LedgerEntry, MonthKey, cash_in_game};

use crate::row::{Row, money};

/// Aggregate the target month out of a full ledger scan.
///
/// Cash-in-game is snapshotted as it stood before the first entry of the
/// target month folds in; interest (plus charges) and principal are
/// month-scoped. The fee cell is the last fee seen anywhere in the pass,
/// which may predate the target month.
///
/// Fails when no entry is dated in the target month.
pub fn previous_month(entries: &[LedgerEntry], target: MonthKey) -> Result<Vec<Row>> {
    let mut cash = 0.0;
    let mut fee_paid = 0.0;
    let mut principal = 0.0;
    let mut interest = 0.0;
    let mut month_start_cash: Option<f64> = None;

    for entry in entries {
        if target.contains(entry.date) {
            if let Some(amount) = entry.principal_repaid() {
                principal += amount;
            }
            if let Some(amount) = entry.interest_received() {
                interest += amount;
            }
            if let Some(amount) = entry.charges_received() {
                interest += amount;
            }
            if month_start_cash.is_none() {
                month_start_cash = Some(cash);
            }
        }

        cash = cash_in_game(cash, entry);
        if let Some(fee) = entry.fee() {
            fee_paid = fee;
        }
    }

    let Some(month_start_cash) = month_start_cash else {
        bail!("no transactions dated in {target}");
    };

    Ok(vec![
        vec![
            money(month_start_cash),
            "Cash in game for this month".to_string(),
        ],
        vec![money(interest), "Total interests received".to_string()],
        vec![money(fee_paid), "Fee paid".to_string()],
        vec![money(principal), "Total principal repaid".to_string()],
    ])
}
