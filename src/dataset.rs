//! Dataset decoding.
//!
//! The card file is a JSON object holding the card list under `cartes`
//! (`cards` is accepted too). Any other top-level keys are ignored.
//! Everything that goes wrong here is a `DataUnavailable` error: the
//! report is all-or-nothing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::cards::CardRecord;
use crate::error::{BalanceError, Result};

#[derive(Deserialize)]
struct Dataset {
    #[serde(rename = "cartes", alias = "cards")]
    cards: Vec<CardRecord>,
}

/// Decode a dataset from a JSON string.
pub fn from_str(json: &str) -> Result<Vec<CardRecord>> {
    let dataset: Dataset = serde_json::from_str(json)?;
    debug!(cards = dataset.cards.len(), "decoded dataset");
    Ok(dataset.cards)
}

/// Decode a dataset from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CardRecord>> {
    let dataset: Dataset = serde_json::from_reader(reader)?;
    debug!(cards = dataset.cards.len(), "decoded dataset");
    Ok(dataset.cards)
}

/// Read and decode a dataset file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        BalanceError::data_unavailable(format!("cannot open {}: {e}", path.display()))
    })?;
    from_reader(std::io::BufReader::new(file)).map_err(|e| match e {
        BalanceError::DataUnavailable { reason } => {
            BalanceError::data_unavailable(format!("{}: {reason}", path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cartes() {
        let cards = from_str(r#"{"version": 2, "cartes": [{"id": "a"}, {"id": "b"}]}"#).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].id.as_deref(), Some("b"));
    }

    #[test]
    fn test_decode_cards_alias() {
        let cards = from_str(r#"{"cards": []}"#).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_missing_collection_key() {
        let err = from_str(r#"{"units": []}"#).unwrap_err();
        assert!(matches!(err, BalanceError::DataUnavailable { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = from_str(r#"{"cartes": [ "#).unwrap_err();
        assert!(matches!(err, BalanceError::DataUnavailable { .. }));
    }

    #[test]
    fn test_wrong_field_type() {
        let err = from_str(r#"{"cartes": [{"id": "a", "pv": "lots"}]}"#).unwrap_err();
        assert!(matches!(err, BalanceError::DataUnavailable { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = from_path("/nonexistent/cards.json").unwrap_err();
        match err {
            BalanceError::DataUnavailable { reason } => assert!(reason.contains("cards.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
