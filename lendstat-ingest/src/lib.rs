//! lendstat-ingest: statement CSV reading (positional layout), row
//! normalization, and platform-export conversion.

pub mod convert;
pub mod statement;
pub mod types;

pub use convert::convert_statement;
pub use statement::{normalize_row, read_statement};
pub use types::{SkipReason, SkippedRow, Statement};
