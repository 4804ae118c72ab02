//! Error types for balance analysis.
//!
//! - `MissingFieldError`: a single card record lacks a required field.
//!   Returned by the scorer and by row assembly.
//! - `BalanceError`: everything a report run can fail with.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, BalanceError>;

/// Card field that the scorer or reporter cannot do without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    /// Card identifier (`id`).
    Id,
    /// Resource cost (`élixir`).
    Cost,
}

impl RequiredField {
    /// Field name as it appears in the dataset.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::Cost => "élixir",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A card record lacks a field the computation requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("card '{card}' is missing field '{field}'")]
pub struct MissingFieldError {
    pub field: RequiredField,
    /// Display name of the offending card (may be empty).
    pub card: String,
}

impl MissingFieldError {
    pub fn new(field: RequiredField, card: impl Into<String>) -> Self {
        Self {
            field,
            card: card.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum BalanceError {
    /// The card collection could not be supplied at all.
    #[error("card data unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// Card at `index` (input order) failed a required-field check.
    #[error("card #{index}: {source}")]
    MissingField {
        index: usize,
        #[source]
        source: MissingFieldError,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl BalanceError {
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        BalanceError::DataUnavailable {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        BalanceError::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub fn missing_field(index: usize, source: MissingFieldError) -> Self {
        BalanceError::MissingField { index, source }
    }
}

impl From<serde_json::Error> for BalanceError {
    fn from(err: serde_json::Error) -> Self {
        BalanceError::data_unavailable(err.to_string())
    }
}
