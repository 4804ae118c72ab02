//! Per-card results and display rows.

use serde::Serialize;

use super::flag::BalanceFlag;
use crate::cards::CardRecord;

/// Exact scoring outcome for one card. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    /// `score / cost`; `None` when cost <= 0.
    pub ratio: Option<f64>,
    pub flag: BalanceFlag,
}

impl ScoreResult {
    /// Ratio used for display and classification (0 when undefined).
    #[must_use]
    pub fn effective_ratio(&self) -> f64 {
        self.ratio.unwrap_or(0.0)
    }
}

/// One printable line of the report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayRow {
    pub name: String,
    pub cost: f64,
    pub health: f64,
    pub dps: f64,
    pub speed: String,
    /// Range label with its original casing and spelling.
    pub range: String,
    /// Score truncated toward zero.
    pub score: i64,
    /// Ratio truncated toward zero.
    pub ratio: i64,
    pub flag: BalanceFlag,
}

impl DisplayRow {
    /// Assemble a row from a card and its result.
    #[must_use]
    pub fn new(card: &CardRecord, cost: f64, result: &ScoreResult) -> Self {
        Self {
            name: card.display_name().to_string(),
            cost,
            health: card.health(),
            dps: card.dps(),
            speed: card.speed().to_string(),
            range: card.range_label().to_string(),
            score: truncate(result.score),
            ratio: truncate(result.effective_ratio()),
            flag: result.flag,
        }
    }
}

/// Truncate toward zero.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
