//! Card records - one entry of the dataset.
//!
//! `CardRecord` mirrors the raw JSON entry: every field is optional because
//! the dataset is hand-edited and routinely omits stats. Defaults are applied
//! by the accessors below, never by the caller, so "absent" is an ordinary
//! value rather than an error.
//!
//! Only `id` (scoring) and `cost` (ratio) are required, and the code that
//! needs them reports their absence as a `MissingFieldError`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::range::RangeCategory;
use crate::error::{MissingFieldError, RequiredField};

/// Opaque ability descriptor. Only the number of abilities is scored.
pub type Ability = serde_json::Value;

/// Abilities of a single card. Cards rarely carry more than a few.
pub type Abilities = SmallVec<[Ability; 4]>;

/// Speed label shown when a card has none.
pub const DEFAULT_SPEED: &str = "medium";

/// One card of the dataset, as decoded.
///
/// ## Example
///
/// ```
/// use card_balance::cards::CardRecord;
///
/// let archer = CardRecord::new("c1")
///     .with_name("Archer")
///     .with_cost(3.0)
///     .with_health(250.0)
///     .with_dps(100.0)
///     .with_range("medium");
///
/// assert_eq!(archer.health(), 250.0);
/// assert_eq!(archer.speed(), "medium");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(rename = "nom", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resource cost (elixir).
    #[serde(
        rename = "élixir",
        alias = "elixir",
        alias = "cost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<f64>,

    /// Hit points.
    #[serde(rename = "pv", alias = "health", default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,

    /// Damage per second.
    #[serde(rename = "atk_dps", alias = "dps", default, skip_serializing_if = "Option::is_none")]
    pub dps: Option<f64>,

    /// Range label, primary field name.
    #[serde(
        rename = "plage",
        alias = "range",
        alias = "range_category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub range: Option<String>,

    /// Range label, secondary field name. Consulted only when `range` is absent.
    #[serde(rename = "portée", default, skip_serializing_if = "Option::is_none")]
    pub range_alt: Option<String>,

    /// Movement speed label (display only).
    #[serde(rename = "vitesse", alias = "speed", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    /// Ability descriptors.
    #[serde(rename = "capacités", alias = "abilities", default)]
    pub abilities: Abilities,
}

impl CardRecord {
    /// Create a record with only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    #[must_use]
    pub fn with_dps(mut self, dps: f64) -> Self {
        self.dps = Some(dps);
        self
    }

    /// Set the primary range label.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = Some(speed.into());
        self
    }

    /// Append an ability descriptor (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<Ability>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    /// Identifier, or a `MissingFieldError` naming this card.
    pub fn require_id(&self) -> Result<&str, MissingFieldError> {
        self.id
            .as_deref()
            .ok_or_else(|| MissingFieldError::new(RequiredField::Id, self.display_name()))
    }

    /// Cost, or a `MissingFieldError` naming this card.
    pub fn require_cost(&self) -> Result<f64, MissingFieldError> {
        self.cost
            .ok_or_else(|| MissingFieldError::new(RequiredField::Cost, self.display_name()))
    }

    /// Name for display; empty when absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Hit points, 0 when absent.
    #[must_use]
    pub fn health(&self) -> f64 {
        self.health.unwrap_or(0.0)
    }

    /// Damage per second, 0 when absent.
    #[must_use]
    pub fn dps(&self) -> f64 {
        self.dps.unwrap_or(0.0)
    }

    /// Speed label, `"medium"` when absent.
    #[must_use]
    pub fn speed(&self) -> &str {
        self.speed.as_deref().unwrap_or(DEFAULT_SPEED)
    }

    /// Range label as written in the dataset (original casing).
    ///
    /// Falls back to the secondary field name, then to `"melee"`.
    #[must_use]
    pub fn range_label(&self) -> &str {
        self.range
            .as_deref()
            .or(self.range_alt.as_deref())
            .unwrap_or(RangeCategory::DEFAULT_LABEL)
    }

    /// Parsed range category, `None` when the label is not recognized.
    #[must_use]
    pub fn range_category(&self) -> Option<RangeCategory> {
        RangeCategory::parse(self.range_label())
    }

    /// Number of abilities.
    #[must_use]
    pub fn ability_count(&self) -> usize {
        self.abilities.len()
    }
}
