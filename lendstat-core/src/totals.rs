//! Running accumulators folded over a ledger scan.

use crate::entry::LedgerEntry;

/// Fold one entry into the cash-in-game running total.
///
/// Deposits, interest, charges and fees all move the working balance;
/// principal repayments shift money between loans and cash without
/// changing it. Must be applied in ledger order.
pub fn cash_in_game(cash: f64, entry: &LedgerEntry) -> f64 {
    let mut cash = cash;
    if let Some(amount) = entry.cash_deposited() {
        cash += amount;
    }
    if let Some(amount) = entry.interest_received() {
        cash += amount;
    }
    if let Some(amount) = entry.charges_received() {
        cash += amount;
    }
    if let Some(amount) = entry.fee() {
        cash += amount;
    }
    cash
}

/// Running sums over a single ledger scan.
///
/// Reset at the start of each report, folded once per entry, read at
/// snapshot points, then discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningTotals {
    pub cash_in_game: f64,
    pub interest: f64,
    pub charges: f64,
    pub fees: f64,
    pub principal: f64,
}

impl RunningTotals {
    pub fn apply(&mut self, entry: &LedgerEntry) {
        self.cash_in_game = cash_in_game(self.cash_in_game, entry);

        if let Some(amount) = entry.interest_received() {
            self.interest += amount;
        }
        if let Some(amount) = entry.charges_received() {
            self.charges += amount;
        }
        if let Some(amount) = entry.fee() {
            self.fees += amount;
        }
        if let Some(amount) = entry.principal_repaid() {
            self.principal += amount;
        }
    }
}
