//! Month-by-month statement table with per-month ROI.

use chrono::Datelike;
use lendstat_core::{LedgerEntry, MonthKey, cash_in_game};

use crate::row::{Row, money, ratio};

fn header() -> Row {
    ["Month", "CiG", "Inter.", "Fee", "ROI", "Princip."]
        .iter()
        .map(|cell| cell.to_string())
        .collect()
}

/// Build the month-by-month table, header first.
///
/// A month closes when an entry's month number differs from the tracked
/// one. The closing row is emitted while folding the first entry of the
/// new month: the platform posts fees as the last transaction of a month,
/// so that entry's fee feeds the closed month's ROI. The open month is
/// never emitted.
pub fn month_table(entries: &[LedgerEntry]) -> Vec<Row> {
    let mut rows = vec![header()];

    let mut principal = 0.0;
    let mut interest = 0.0;
    let mut cash = 0.0;

    let mut closed_principal = 0.0;
    let mut closed_interest = 0.0;
    let mut closed_start_cash = 0.0;

    // The tracker predates any statement row.
    let mut tracked = MonthKey::new(1, 2000);
    let mut open_start_cash = 0.0;
    let mut new_month = false;
    let mut roi = 0.0;

    for entry in entries {
        if entry.date.month() != tracked.month {
            closed_principal = principal;
            principal = 0.0;
            closed_interest = interest;
            interest = 0.0;
            closed_start_cash = open_start_cash;

            open_start_cash = cash;
            tracked = MonthKey::of(entry.date);
            new_month = true;
        }

        cash = cash_in_game(cash, entry);

        if let Some(amount) = entry.principal_repaid() {
            principal += amount;
        }
        if let Some(amount) = entry.interest_received() {
            interest += amount;
        }
        if let Some(amount) = entry.charges_received() {
            interest += amount;
        }

        if new_month {
            let fee = entry.fee().unwrap_or(0.0);
            new_month = false;

            // Fee is negative; only a positive opening balance yields a
            // meaningful ratio.
            if closed_start_cash > 0.0 {
                roi = (closed_interest + fee) / closed_start_cash;
            }

            rows.push(vec![
                tracked.pred().to_string(),
                money(closed_start_cash),
                money(closed_interest),
                money(fee),
                ratio(roi),
                money(closed_principal),
            ]);
        }
    }

    rows
}
