//! Scoring rule tables.
//!
//! All constants of the power heuristic live here and are handed to the
//! scorer explicitly. `ScoringRules::default()` is the canonical heuristic:
//!
//! ```text
//! score = 0.4*health + 1.2*dps + range_bonus + 50*abilities
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::RangeCategory;
use crate::error::{BalanceError, Result};

/// Identifier of the unstable legendary card.
///
/// Known one-off exception to the general formula: its ability bonus is
/// reduced by `UNSTABLE_LEGEND_PENALTY`. Exact match only.
pub const UNSTABLE_LEGEND_ID: &str = "jacques_unstable_legend";

/// Penalty applied to the unstable legendary card's ability bonus.
pub const UNSTABLE_LEGEND_PENALTY: f64 = 100.0;

/// Flat bonus per range category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBonusTable {
    pub melee: f64,
    pub short: f64,
    pub medium: f64,
    pub long: f64,
    pub very_long: f64,
    pub global: f64,
    pub mixed: f64,
    pub none: f64,
}

impl Default for RangeBonusTable {
    fn default() -> Self {
        Self {
            melee: 0.0,
            short: 20.0,
            medium: 40.0,
            long: 60.0,
            very_long: 80.0,
            global: 100.0,
            mixed: 30.0,
            none: 0.0,
        }
    }
}

impl RangeBonusTable {
    /// Bonus for a category.
    #[must_use]
    pub fn get(&self, category: RangeCategory) -> f64 {
        match category {
            RangeCategory::Melee => self.melee,
            RangeCategory::Short => self.short,
            RangeCategory::Medium => self.medium,
            RangeCategory::Long => self.long,
            RangeCategory::VeryLong => self.very_long,
            RangeCategory::Global => self.global,
            RangeCategory::Mixed => self.mixed,
            RangeCategory::None => self.none,
        }
    }

    /// Bonus for a raw label. Unrecognized labels score 0.
    #[must_use]
    pub fn for_label(&self, label: &str) -> f64 {
        RangeCategory::parse(label).map_or(0.0, |category| self.get(category))
    }

    fn values(&self) -> impl Iterator<Item = (RangeCategory, f64)> + '_ {
        RangeCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Weights and bonuses of the power heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points per hit point.
    pub health_weight: f64,

    /// Points per unit of damage per second.
    pub dps_weight: f64,

    /// Points per ability.
    pub ability_bonus: f64,

    /// Range category bonuses.
    pub range_bonus: RangeBonusTable,

    /// Identifier that receives the instability penalty.
    pub unstable_id: String,

    /// Amount removed from the unstable card's ability bonus.
    pub unstable_penalty: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            health_weight: 0.4,
            dps_weight: 1.2,
            ability_bonus: 50.0,
            range_bonus: RangeBonusTable::default(),
            unstable_id: UNSTABLE_LEGEND_ID.to_string(),
            unstable_penalty: UNSTABLE_LEGEND_PENALTY,
        }
    }
}

impl ScoringRules {
    #[must_use]
    pub fn with_health_weight(mut self, weight: f64) -> Self {
        self.health_weight = weight;
        self
    }

    #[must_use]
    pub fn with_dps_weight(mut self, weight: f64) -> Self {
        self.dps_weight = weight;
        self
    }

    #[must_use]
    pub fn with_ability_bonus(mut self, bonus: f64) -> Self {
        self.ability_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_range_bonus(mut self, table: RangeBonusTable) -> Self {
        self.range_bonus = table;
        self
    }

    /// Is this the one card that carries the instability penalty?
    #[must_use]
    pub fn is_unstable(&self, id: &str) -> bool {
        id == self.unstable_id
    }

    /// Reject weights that would break monotonicity of the score.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("health_weight", self.health_weight),
            ("dps_weight", self.dps_weight),
            ("ability_bonus", self.ability_bonus),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(BalanceError::invalid_config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (category, value) in self.range_bonus.values() {
            if !value.is_finite() {
                return Err(BalanceError::invalid_config(format!(
                    "range bonus for {category} must be finite"
                )));
            }
        }
        if !self.unstable_penalty.is_finite() {
            return Err(BalanceError::invalid_config("unstable_penalty must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_table() {
        let table = RangeBonusTable::default();
        assert_eq!(table.get(RangeCategory::Melee), 0.0);
        assert_eq!(table.get(RangeCategory::Short), 20.0);
        assert_eq!(table.get(RangeCategory::Medium), 40.0);
        assert_eq!(table.get(RangeCategory::Long), 60.0);
        assert_eq!(table.get(RangeCategory::VeryLong), 80.0);
        assert_eq!(table.get(RangeCategory::Global), 100.0);
        assert_eq!(table.get(RangeCategory::Mixed), 30.0);
        assert_eq!(table.get(RangeCategory::None), 0.0);
    }

    #[test]
    fn test_label_lookup() {
        let table = RangeBonusTable::default();
        assert_eq!(table.for_label("Très_Longue"), 80.0);
        assert_eq!(table.for_label("mixte"), 30.0);
        assert_eq!(table.for_label("sniper"), 0.0);
        assert_eq!(table.for_label(""), 0.0);
    }

    #[test]
    fn test_unstable_is_exact_match() {
        let rules = ScoringRules::default();
        assert!(rules.is_unstable("jacques_unstable_legend"));
        assert!(!rules.is_unstable("Jacques_Unstable_Legend"));
        assert!(!rules.is_unstable("jacques_unstable_legend_2"));
        assert!(!rules.is_unstable("jacques"));
    }

    #[test]
    fn test_validate() {
        assert!(ScoringRules::default().validate().is_ok());
        assert!(ScoringRules::default().with_dps_weight(-1.0).validate().is_err());
        assert!(ScoringRules::default().with_health_weight(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let rules: ScoringRules = serde_json::from_str(r#"{"dps_weight": 2.0}"#).unwrap();
        assert_eq!(rules.dps_weight, 2.0);
        assert_eq!(rules.health_weight, 0.4);
        assert_eq!(rules.range_bonus, RangeBonusTable::default());
        assert_eq!(rules.unstable_id, UNSTABLE_LEGEND_ID);
    }
}
