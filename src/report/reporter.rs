//! Report generation.
//!
//! Each card is scored, normalized by its cost and classified on its own;
//! no row depends on another. Rows come back in input order on both the
//! sequential and the parallel path.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::flag::BalanceFlag;
use super::row::{DisplayRow, ScoreResult};
use crate::cards::CardRecord;
use crate::config::{BalanceConfig, MissingFieldPolicy, Thresholds};
use crate::error::{BalanceError, MissingFieldError, Result};
use crate::scoring::{LinearScorer, Scorer};

/// A card dropped from the report in lenient mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Position of the card in the input.
    pub index: usize,
    pub message: String,
}

/// Flag counts over a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub overpowered: usize,
    pub weak: usize,
    pub balanced: usize,
    pub skipped: usize,
}

/// Rows of a report run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<DisplayRow>,
    /// Cards skipped under `MissingFieldPolicy::Skip`.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.rows.len(),
            skipped: self.diagnostics.len(),
            ..ReportSummary::default()
        };
        for row in &self.rows {
            match row.flag {
                BalanceFlag::Overpowered => summary.overpowered += 1,
                BalanceFlag::Weak => summary.weak += 1,
                BalanceFlag::None => summary.balanced += 1,
            }
        }
        summary
    }
}

/// Builds balance reports from card records.
///
/// ## Example
///
/// ```
/// use card_balance::cards::CardRecord;
/// use card_balance::report::{BalanceFlag, Reporter};
///
/// let cards = vec![
///     CardRecord::new("c1").with_name("Archer").with_cost(3.0)
///         .with_health(250.0).with_dps(100.0).with_range("medium"),
/// ];
///
/// let report = Reporter::default().build_report(&cards).unwrap();
/// assert_eq!(report.rows[0].score, 260);
/// assert_eq!(report.rows[0].ratio, 86);
/// assert_eq!(report.rows[0].flag, BalanceFlag::Weak);
/// ```
#[derive(Clone, Debug)]
pub struct Reporter<S = LinearScorer> {
    scorer: S,
    thresholds: Thresholds,
    policy: MissingFieldPolicy,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(BalanceConfig::default())
    }
}

impl Reporter {
    /// Reporter using the linear heuristic with the config's rules.
    #[must_use]
    pub fn new(config: BalanceConfig) -> Self {
        Self {
            scorer: LinearScorer::new(config.scoring),
            thresholds: config.thresholds,
            policy: config.missing_fields,
        }
    }
}

impl<S: Scorer> Reporter<S> {
    /// Reporter with a custom scorer.
    pub fn with_scorer(scorer: S, thresholds: Thresholds, policy: MissingFieldPolicy) -> Self {
        Self {
            scorer,
            thresholds,
            policy,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn policy(&self) -> MissingFieldPolicy {
        self.policy
    }

    /// Score, ratio and flag of a single card.
    ///
    /// A cost of zero or less yields no ratio and is classified as ratio 0.
    pub fn evaluate(&self, card: &CardRecord) -> std::result::Result<ScoreResult, MissingFieldError> {
        self.assess(card).map(|(_, result)| result)
    }

    /// Cost and result of a card. The only place the ratio rule lives.
    fn assess(&self, card: &CardRecord) -> std::result::Result<(f64, ScoreResult), MissingFieldError> {
        let score = self.scorer.score(card)?;
        let cost = card.require_cost()?;
        let ratio = (cost > 0.0).then(|| score / cost);
        let flag = BalanceFlag::classify(ratio.unwrap_or(0.0), &self.thresholds);
        Ok((cost, ScoreResult { score, ratio, flag }))
    }

    /// Display row of a single card.
    pub fn row(&self, card: &CardRecord) -> std::result::Result<DisplayRow, MissingFieldError> {
        let (cost, result) = self.assess(card)?;
        debug!(
            card = card.display_name(),
            score = result.score,
            ratio = result.effective_ratio(),
            flag = ?result.flag,
            "evaluated card"
        );
        Ok(DisplayRow::new(card, cost, &result))
    }

    /// Build the report sequentially.
    pub fn build_report(&self, cards: &[CardRecord]) -> Result<Report> {
        self.collect(cards.iter().map(|card| self.row(card)))
    }

    /// Build the report with rayon. Same rows, same order, same errors as
    /// `build_report`.
    pub fn build_report_parallel(&self, cards: &[CardRecord]) -> Result<Report> {
        let outcomes: Vec<_> = cards.par_iter().map(|card| self.row(card)).collect();
        self.collect(outcomes)
    }

    fn collect<I>(&self, outcomes: I) -> Result<Report>
    where
        I: IntoIterator<Item = std::result::Result<DisplayRow, MissingFieldError>>,
    {
        let mut report = Report::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(row) => report.rows.push(row),
                Err(err) => match self.policy {
                    MissingFieldPolicy::Abort => {
                        return Err(BalanceError::missing_field(index, err));
                    }
                    MissingFieldPolicy::Skip => {
                        warn!(index, error = %err, "skipping card");
                        report.diagnostics.push(Diagnostic {
                            index,
                            message: err.to_string(),
                        });
                    }
                },
            }
        }

        let summary = report.summary();
        info!(
            rows = summary.total,
            overpowered = summary.overpowered,
            weak = summary.weak,
            skipped = summary.skipped,
            "report built"
        );
        Ok(report)
    }
}

/// Build report rows with the default configuration.
///
/// Aborts on the first card missing `id` or `cost`.
pub fn build_report(cards: &[CardRecord]) -> Result<Vec<DisplayRow>> {
    Reporter::default().build_report(cards).map(|report| report.rows)
}
