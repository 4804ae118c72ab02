//! Balance classification of a cost-efficiency ratio.

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;

/// Balance flag attached to a report row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceFlag {
    /// Ratio inside the band (boundaries included).
    #[default]
    None,
    /// Ratio strictly above the overpowered threshold.
    Overpowered,
    /// Ratio strictly below the weak threshold.
    Weak,
}

impl BalanceFlag {
    /// Classify a ratio against the thresholds.
    ///
    /// A ratio exactly on a threshold is not flagged.
    #[must_use]
    pub fn classify(ratio: f64, thresholds: &Thresholds) -> Self {
        if ratio > thresholds.overpowered {
            BalanceFlag::Overpowered
        } else if ratio < thresholds.weak {
            BalanceFlag::Weak
        } else {
            BalanceFlag::None
        }
    }

    /// Table suffix, `None` for unflagged rows.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            BalanceFlag::None => None,
            BalanceFlag::Overpowered => Some("🔴 OP"),
            BalanceFlag::Weak => Some("🔵 WEAK"),
        }
    }

    #[must_use]
    pub const fn is_flagged(self) -> bool {
        !matches!(self, BalanceFlag::None)
    }
}
