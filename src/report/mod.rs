//! Balance report: per-card score, cost-efficiency ratio and flag.
//!
//! ## Key Types
//!
//! - `Reporter`: turns card records into rows, in input order
//! - `ScoreResult`: exact score, ratio and flag of one card
//! - `DisplayRow`: truncated, printable values of one card
//! - `BalanceFlag`: overpowered / weak classification
//! - `ReportTable`: fixed-width text rendering

pub mod flag;
pub mod reporter;
pub mod row;
pub mod table;

pub use flag::BalanceFlag;
pub use reporter::{build_report, Diagnostic, Report, ReportSummary, Reporter};
pub use row::{DisplayRow, ScoreResult};
pub use table::{render_table, ReportTable};
