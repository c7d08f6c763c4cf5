//! Read converted statement files into typed ledger entries.
//!
//! The converted layout keeps the export's column positions but replaces
//! the header with column indices:
//! 0 = transaction date (DD/MM/YYYY), 1 = label, 8 = signed amount.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use lendstat_core::{DATE_FORMAT, LedgerEntry};
use log::warn;
use std::path::Path;

use crate::types::{SkipReason, SkippedRow, Statement};

pub const DATE_COL: usize = 0;
pub const LABEL_COL: usize = 1;
pub const AMOUNT_COL: usize = 8;

/// Normalize one raw statement record into a ledger entry.
///
/// A blank amount field counts as 0.0; a blank or malformed date, or a
/// non-numeric amount, rejects the whole row with its reason.
pub fn normalize_row(record: &StringRecord) -> Result<LedgerEntry, SkipReason> {
    let date_raw = record.get(DATE_COL).unwrap_or("").trim();
    if date_raw.is_empty() {
        return Err(SkipReason::MissingDate);
    }
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
        .map_err(|_| SkipReason::BadDate(date_raw.to_string()))?;

    let amount_raw = record.get(AMOUNT_COL).unwrap_or("").trim();
    let amount = if amount_raw.is_empty() {
        0.0
    } else {
        amount_raw
            .parse::<f64>()
            .map_err(|_| SkipReason::BadAmount(amount_raw.to_string()))?
    };

    let label = record.get(LABEL_COL).unwrap_or("").trim();
    Ok(LedgerEntry::new(date, label, amount))
}

/// Read a converted statement file, oldest row first.
///
/// Dropped rows are logged and kept on the returned [`Statement`] for
/// observability; aggregation sees only the surviving entries.
pub fn read_statement(path: impl AsRef<Path>) -> Result<Statement> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut statement = Statement::default();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let number = index as u64 + 1;

        match normalize_row(&record) {
            Ok(entry) => statement.entries.push(entry),
            Err(reason) => {
                let raw = record.iter().collect::<Vec<_>>().join(",");
                warn!("statement record {number} dropped: {reason} ({raw})");
                statement.skipped.push(SkippedRow {
                    record: number,
                    raw,
                    reason,
                });
            }
        }
    }

    Ok(statement)
}
