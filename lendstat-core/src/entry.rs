//! Ledger entry model and category classification for statement rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used throughout the statement file (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Transaction categories recognized on statement labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Deposit,
    Interest,
    Bonus,
    CapitalRepayment,
    Fee,
    Other,
}

impl Category {
    /// Classify a raw statement label.
    /// The platform exports both "Capital Repayment" and "Capital repayment".
    pub fn from_label(label: &str) -> Self {
        match label {
            "Deposit" => Category::Deposit,
            "Interest" => Category::Interest,
            "Bonus" => Category::Bonus,
            "Capital Repayment" | "Capital repayment" => Category::CapitalRepayment,
            _ => Category::Other,
        }
    }
}

/// One classified row of the normalized statement ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    /// Raw label as exported, before classification.
    pub label: String,
    pub category: Category,
    /// Signed amount; fees and withdrawals are negative on the statement.
    pub amount: f64,
}

impl LedgerEntry {
    pub fn new(date: NaiveDate, label: impl Into<String>, amount: f64) -> Self {
        let label = label.into();
        let category = Category::from_label(&label);
        Self {
            date,
            label,
            category,
            amount,
        }
    }

    /// Money moved into the account by a deposit.
    pub fn cash_deposited(&self) -> Option<f64> {
        (self.category == Category::Deposit).then_some(self.amount)
    }

    /// Interest credited by a borrower repayment.
    pub fn interest_received(&self) -> Option<f64> {
        (self.category == Category::Interest).then_some(self.amount)
    }

    /// Bonus credits; the statement reports call these "charges".
    pub fn charges_received(&self) -> Option<f64> {
        (self.category == Category::Bonus).then_some(self.amount)
    }

    /// Loan principal returned to the account.
    pub fn principal_repaid(&self) -> Option<f64> {
        (self.category == Category::CapitalRepayment).then_some(self.amount)
    }

    /// Platform fee. No exported label maps to [`Category::Fee`] today, so
    /// parsed entries never populate this bucket.
    pub fn fee(&self) -> Option<f64> {
        (self.category == Category::Fee).then_some(self.amount)
    }
}
