//! Target Encoding of High-Cardinality Columns
//!
//! The classifier was trained with six categorical columns replaced by
//! per-category target statistics. [`TargetEncoder`] is the seam for that
//! pre-fitted lookup; [`FittedTargetEncoder`] reads a fitted artifact.

use crate::error::EncodingError;
use crate::query::FlightQuery;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// High-cardinality column passed through the target encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoricalColumn {
    #[serde(rename = "Carrier_Origin")]
    CarrierOrigin,
    #[serde(rename = "Carrier_Dest")]
    CarrierDest,
    #[serde(rename = "Day_Month")]
    DayMonth,
    #[serde(rename = "UniqueCarrier")]
    UniqueCarrier,
    #[serde(rename = "Origin")]
    Origin,
    #[serde(rename = "Dest")]
    Dest,
}

impl CategoricalColumn {
    /// Columns in the order they are handed to the encoder
    pub const ALL: [CategoricalColumn; 6] = [
        CategoricalColumn::CarrierOrigin,
        CategoricalColumn::CarrierDest,
        CategoricalColumn::DayMonth,
        CategoricalColumn::UniqueCarrier,
        CategoricalColumn::Origin,
        CategoricalColumn::Dest,
    ];

    /// Column name as the encoder was fitted with
    pub fn name(&self) -> &'static str {
        match self {
            CategoricalColumn::CarrierOrigin => "Carrier_Origin",
            CategoricalColumn::CarrierDest => "Carrier_Dest",
            CategoricalColumn::DayMonth => "Day_Month",
            CategoricalColumn::UniqueCarrier => "UniqueCarrier",
            CategoricalColumn::Origin => "Origin",
            CategoricalColumn::Dest => "Dest",
        }
    }

    /// Parse a fitted column name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|col| col.name() == name)
    }
}

/// One row of categorical values, keyed by column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalColumns {
    values: [(CategoricalColumn, String); 6],
}

impl CategoricalColumns {
    /// Build the batch for one query, including the interaction strings
    pub fn from_query(query: &FlightQuery) -> Self {
        Self {
            values: [
                (CategoricalColumn::CarrierOrigin, query.carrier_origin()),
                (CategoricalColumn::CarrierDest, query.carrier_dest()),
                (CategoricalColumn::DayMonth, query.day_month()),
                (CategoricalColumn::UniqueCarrier, query.carrier.clone()),
                (CategoricalColumn::Origin, query.origin.clone()),
                (CategoricalColumn::Dest, query.destination.clone()),
            ],
        }
    }

    /// Category value for a column
    pub fn get(&self, column: CategoricalColumn) -> Option<&str> {
        self.values
            .iter()
            .find(|(col, _)| *col == column)
            .map(|(_, value)| value.as_str())
    }

    /// `(column, value)` pairs in encoder order
    pub fn iter(&self) -> impl Iterator<Item = (CategoricalColumn, &str)> {
        self.values.iter().map(|(col, value)| (*col, value.as_str()))
    }
}

/// Encoded values per column. A column may be absent when the encoder
/// has nothing for it.
pub type EncodedColumns = HashMap<CategoricalColumn, f64>;

/// Pre-fitted categorical target encoder.
///
/// Implementations are read-only lookups shared across callers.
pub trait TargetEncoder: Send + Sync {
    /// Replace each categorical value with its numeric encoding
    fn transform(&self, columns: &CategoricalColumns) -> Result<EncodedColumns, EncodingError>;
}

/// What to return for a category that was never seen while fitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Return the global prior
    #[default]
    Value,
    /// Return NaN
    ReturnNan,
    /// Fail the transform
    Error,
}

/// On-disk layout of a fitted encoder
#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    prior: f64,
    #[serde(default)]
    handle_unknown: HandleUnknown,
    mapping: HashMap<String, HashMap<String, f64>>,
}

/// Target encoder backed by fitted per-category statistics
#[derive(Debug, Clone)]
pub struct FittedTargetEncoder {
    /// Global target mean used as the fallback
    prior: f64,
    /// Unseen category behaviour
    handle_unknown: HandleUnknown,
    /// Fitted statistics per column
    mapping: HashMap<CategoricalColumn, HashMap<String, f64>>,
}

impl FittedTargetEncoder {
    /// Create an encoder with no fitted columns
    pub fn new(prior: f64, handle_unknown: HandleUnknown) -> Self {
        Self {
            prior,
            handle_unknown,
            mapping: HashMap::new(),
        }
    }

    /// Add fitted statistics for one column
    pub fn with_column<I, K>(mut self, column: CategoricalColumn, stats: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.mapping
            .entry(column)
            .or_default()
            .extend(stats.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Parse a fitted encoder from JSON
    pub fn from_json_str(json: &str) -> Result<Self, EncodingError> {
        let artifact: EncoderArtifact = serde_json::from_str(json)
            .map_err(|e| EncodingError::ArtifactLoad(e.to_string()))?;

        let mut mapping = HashMap::with_capacity(artifact.mapping.len());
        for (name, stats) in artifact.mapping {
            let Some(column) = CategoricalColumn::from_name(&name) else {
                warn!("Ignoring unknown encoder column '{}'", name);
                continue;
            };
            mapping.insert(column, stats);
        }

        Ok(Self {
            prior: artifact.prior,
            handle_unknown: artifact.handle_unknown,
            mapping,
        })
    }

    /// Load a fitted encoder artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodingError> {
        let path = path.as_ref();
        info!("Loading target encoder from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| EncodingError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
        let encoder = Self::from_json_str(&json)?;
        info!(
            "Target encoder loaded: {} columns, prior={:.4}",
            encoder.mapping.len(),
            encoder.prior
        );
        Ok(encoder)
    }

    /// Global prior
    pub fn prior(&self) -> f64 {
        self.prior
    }
}

impl TargetEncoder for FittedTargetEncoder {
    fn transform(&self, columns: &CategoricalColumns) -> Result<EncodedColumns, EncodingError> {
        let mut encoded = EncodedColumns::with_capacity(CategoricalColumn::ALL.len());

        for (column, category) in columns.iter() {
            let Some(stats) = self.mapping.get(&column) else {
                continue;
            };

            let value = match stats.get(category) {
                Some(value) => *value,
                None => match self.handle_unknown {
                    HandleUnknown::Value => {
                        debug!("Unseen {}='{}', using prior", column.name(), category);
                        self.prior
                    }
                    HandleUnknown::ReturnNan => f64::NAN,
                    HandleUnknown::Error => {
                        return Err(EncodingError::EncodingFailure(format!(
                            "unseen category '{}' in column {}",
                            category,
                            column.name()
                        )))
                    }
                },
            };
            encoded.insert(column, value);
        }

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> FlightQuery {
        FlightQuery {
            month: 3,
            day_of_month: 15,
            day_of_week: 3,
            departure_time: 830,
            carrier: "DL".to_string(),
            origin: "ATL".to_string(),
            destination: "JFK".to_string(),
            distance: 760,
        }
    }

    #[test]
    fn test_columns_from_query() {
        let columns = CategoricalColumns::from_query(&query());
        assert_eq!(columns.get(CategoricalColumn::CarrierOrigin), Some("DL_ATL"));
        assert_eq!(columns.get(CategoricalColumn::CarrierDest), Some("DL_JFK"));
        assert_eq!(columns.get(CategoricalColumn::DayMonth), Some("3_3"));
        assert_eq!(columns.get(CategoricalColumn::UniqueCarrier), Some("DL"));
        assert_eq!(columns.iter().count(), 6);
    }

    #[test]
    fn test_unseen_category_uses_prior() {
        let encoder = FittedTargetEncoder::new(0.8, HandleUnknown::Value)
            .with_column(CategoricalColumn::UniqueCarrier, [("AA", 0.7)]);
        let encoded = encoder
            .transform(&CategoricalColumns::from_query(&query()))
            .unwrap();
        assert_eq!(encoded[&CategoricalColumn::UniqueCarrier], 0.8);
        assert!(!encoded.contains_key(&CategoricalColumn::Origin));
    }

    #[test]
    fn test_unseen_category_error_mode() {
        let encoder = FittedTargetEncoder::new(0.8, HandleUnknown::Error)
            .with_column(CategoricalColumn::Origin, [("JFK", 0.6)]);
        let err = encoder
            .transform(&CategoricalColumns::from_query(&query()))
            .unwrap_err();
        assert!(matches!(err, EncodingError::EncodingFailure(_)));
        assert!(err.to_string().contains("ATL"));
    }

    #[test]
    fn test_unseen_category_nan_mode() {
        let encoder = FittedTargetEncoder::new(0.8, HandleUnknown::ReturnNan)
            .with_column(CategoricalColumn::Dest, [("LAX", 0.6)]);
        let encoded = encoder
            .transform(&CategoricalColumns::from_query(&query()))
            .unwrap();
        assert!(encoded[&CategoricalColumn::Dest].is_nan());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "prior": 0.81,
            "handle_unknown": "value",
            "mapping": {
                "UniqueCarrier": {"DL": 0.85, "AA": 0.78},
                "Carrier_Origin": {"DL_ATL": 0.83},
                "Legacy": {"x": 1.0}
            }
        }"#;
        let encoder = FittedTargetEncoder::from_json_str(json).unwrap();
        assert_eq!(encoder.prior(), 0.81);

        let encoded = encoder
            .transform(&CategoricalColumns::from_query(&query()))
            .unwrap();
        assert_eq!(encoded[&CategoricalColumn::UniqueCarrier], 0.85);
        assert_eq!(encoded[&CategoricalColumn::CarrierOrigin], 0.83);
        assert_eq!(encoded.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_artifact() {
        assert!(FittedTargetEncoder::from_json_str("{}").is_err());
        assert!(FittedTargetEncoder::from_json_str("not json").is_err());
    }
}
