//! Report configuration.
//!
//! A run is configured by:
//! - `ScoringRules`: weights and bonus tables of the power heuristic
//! - `Thresholds`: cost-efficiency band outside of which cards are flagged
//! - `MissingFieldPolicy`: what to do with cards lacking `id` or `cost`
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};
use crate::scoring::ScoringRules;

/// Cost-efficiency band. Both bounds are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Ratios strictly above this are overpowered.
    pub overpowered: f64,
    /// Ratios strictly below this are weak.
    pub weak: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            overpowered: 260.0,
            weak: 180.0,
        }
    }
}

/// Handling of cards that lack a required field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Fail the whole report on the first offending card.
    #[default]
    Abort,
    /// Drop the card and record a diagnostic (lenient mode).
    Skip,
}

/// Full configuration of a report run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub scoring: ScoringRules,
    pub thresholds: Thresholds,
    pub missing_fields: MissingFieldPolicy,
}

impl BalanceConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BalanceError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BalanceError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    /// Shorthand for `with_missing_fields(MissingFieldPolicy::Skip)`.
    #[must_use]
    pub fn lenient(self) -> Self {
        self.with_missing_fields(MissingFieldPolicy::Skip)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;

        let Thresholds { overpowered, weak } = self.thresholds;
        if !overpowered.is_finite() || !weak.is_finite() {
            return Err(BalanceError::invalid_config("thresholds must be finite"));
        }
        if weak > overpowered {
            return Err(BalanceError::invalid_config(format!(
                "weak threshold ({weak}) is above overpowered threshold ({overpowered})"
            )));
        }
        Ok(())
    }
}
