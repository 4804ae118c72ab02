//! Power score computation.
//!
//! The `Scorer` trait is the seam between the report and the heuristic.
//! `LinearScorer` is the only implementation: a weighted sum of stats plus
//! flat range and ability bonuses.

use serde::Serialize;
use tracing::trace;

use super::rules::ScoringRules;
use crate::cards::CardRecord;
use crate::error::MissingFieldError;

/// Per-term contributions to a card's power score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Weighted hit points.
    pub health: f64,
    /// Weighted damage per second.
    pub dps: f64,
    /// Range category bonus.
    pub range: f64,
    /// Ability bonus before any penalty.
    pub abilities: f64,
    /// Penalty removed from the ability bonus (0 for ordinary cards).
    pub instability_penalty: f64,
}

impl ScoreBreakdown {
    /// Ability bonus after the instability penalty. May be negative.
    #[must_use]
    pub fn ability_bonus(&self) -> f64 {
        self.abilities - self.instability_penalty
    }

    /// Final power score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.health + self.dps + self.range + self.ability_bonus()
    }

    /// Score the same stats would get without the one-off penalty.
    #[must_use]
    pub fn total_without_override(&self) -> f64 {
        self.health + self.dps + self.range + self.abilities
    }
}

/// Maps a card record to a power score.
///
/// Implementations must be pure: the score depends on the card alone.
pub trait Scorer: Send + Sync {
    /// Compute the per-term breakdown.
    ///
    /// Fails only when the card has no identifier.
    fn breakdown(&self, card: &CardRecord) -> Result<ScoreBreakdown, MissingFieldError>;

    /// Compute the power score.
    fn score(&self, card: &CardRecord) -> Result<f64, MissingFieldError> {
        Ok(self.breakdown(card)?.total())
    }
}

/// Linear power heuristic driven by `ScoringRules`.
///
/// ## Example
///
/// ```
/// use card_balance::cards::CardRecord;
/// use card_balance::scoring::{LinearScorer, Scorer};
///
/// let archer = CardRecord::new("c1")
///     .with_health(250.0)
///     .with_dps(100.0)
///     .with_range("medium");
///
/// let score = LinearScorer::default().score(&archer).unwrap();
/// assert_eq!(score, 260.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinearScorer {
    rules: ScoringRules,
}

impl LinearScorer {
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }
}

impl Scorer for LinearScorer {
    fn breakdown(&self, card: &CardRecord) -> Result<ScoreBreakdown, MissingFieldError> {
        let id = card.require_id()?;
        let rules = &self.rules;

        let breakdown = ScoreBreakdown {
            health: rules.health_weight * card.health(),
            dps: rules.dps_weight * card.dps(),
            range: rules.range_bonus.for_label(card.range_label()),
            abilities: rules.ability_bonus * card.ability_count() as f64,
            // One-off exception: the unstable legend is penalized for unreliability.
            instability_penalty: if rules.is_unstable(id) {
                rules.unstable_penalty
            } else {
                0.0
            },
        };

        trace!(card = id, ?breakdown, "scored card");
        Ok(breakdown)
    }
}

/// Score a card with the default heuristic.
pub fn score(card: &CardRecord) -> Result<f64, MissingFieldError> {
    LinearScorer::default().score(card)
}
