//! lendstat-reports: aggregation passes over a normalized statement ledger.
//!
//! Each report is an independent forward scan producing an ordered list of
//! formatted rows; nothing is shared or cached between reports.

pub mod cash_flow;
pub mod month_table;
pub mod previous_month;
pub mod row;
pub mod totals;

pub use cash_flow::cash_flow;
pub use month_table::month_table;
pub use previous_month::previous_month;
pub use row::{Row, tabbed};
pub use totals::{all_time, fees_paid};
