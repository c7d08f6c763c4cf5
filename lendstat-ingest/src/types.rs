use lendstat_core::LedgerEntry;
use thiserror::Error;

/// Why a statement row produced no ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("empty date field")]
    MissingDate,
    #[error("unparseable date {0:?}")]
    BadDate(String),
    #[error("unparseable amount {0:?}")]
    BadAmount(String),
}

/// A dropped statement row, retained so callers can assert on skip counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based data record number within the statement file.
    pub record: u64,
    pub raw: String,
    pub reason: SkipReason,
}

/// Result of reading a statement file: surviving entries in file order,
/// plus the rows dropped along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    pub entries: Vec<LedgerEntry>,
    pub skipped: Vec<SkippedRow>,
}
