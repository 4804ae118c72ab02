//! # card-balance
//!
//! Balance checker for collectible card datasets.
//!
//! Every card gets a power score from its stats and abilities. The score is
//! divided by the card's elixir cost and the resulting cost-efficiency ratio
//! is compared against a fixed band; cards above it are flagged
//! overpowered, cards below it weak.
//!
//! ## Design Principles
//!
//! 1. **Pure per-card transform**: a card's score and ratio depend on that
//!    card alone. Rows come out in input order, never sorted.
//!
//! 2. **Explicit rule tables**: weights, range bonuses and thresholds are
//!    plain values in `BalanceConfig`, handed to the reporter. No globals.
//!
//! 3. **Defaults are not errors**: absent stats resolve to defaults through
//!    `CardRecord` accessors. Only a missing `id` or `cost` fails.
//!
//! ## Modules
//!
//! - `cards`: Card records and range categories
//! - `scoring`: Rule tables and the power scorer
//! - `report`: Ratio, classification, display rows and table rendering
//! - `config`: Run configuration (rules, thresholds, missing-field policy)
//! - `dataset`: JSON dataset decoding
//! - `error`: Error types

pub mod cards;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::cards::{CardRecord, RangeCategory};

pub use crate::config::{BalanceConfig, MissingFieldPolicy, Thresholds};

pub use crate::error::{BalanceError, MissingFieldError, RequiredField, Result};

pub use crate::scoring::{LinearScorer, RangeBonusTable, ScoreBreakdown, Scorer, ScoringRules};

pub use crate::report::{
    build_report, render_table, BalanceFlag, DisplayRow, Report, ReportSummary, ReportTable,
    Reporter, ScoreResult,
};
