//! Power scoring.
//!
//! - `ScoringRules`: weights and bonus tables, passed explicitly
//! - `Scorer`: trait mapping a card to a score
//! - `LinearScorer`: the weighted-sum heuristic
//! - `ScoreBreakdown`: per-term contributions of one score

pub mod rules;
pub mod scorer;

pub use rules::{RangeBonusTable, ScoringRules, UNSTABLE_LEGEND_ID, UNSTABLE_LEGEND_PENALTY};
pub use scorer::{score, LinearScorer, ScoreBreakdown, Scorer};
