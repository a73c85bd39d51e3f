//! Feature Encoder

use crate::buckets::{DistanceCategory, TimeOfDay};
use crate::error::EncodingError;
use crate::query::FlightQuery;
use crate::target::{CategoricalColumn, CategoricalColumns, EncodedColumns, TargetEncoder};
use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// How to treat a target-encoded column the encoder did not return, or
/// returned as NaN or infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPolicy {
    /// Fail with [`EncodingError::SchemaMismatch`] for a missing column and
    /// [`EncodingError::EncodingFailure`] for a non-finite one
    #[default]
    Strict,
    /// Fill the column with 0.0 and carry on
    ZeroFill,
}

/// Maps one [`FlightQuery`] to one [`FeatureVector`].
///
/// Stateless apart from the shared, read-only target encoder, so a single
/// instance can serve concurrent callers.
#[derive(Clone)]
pub struct FeatureEncoder {
    /// Pre-fitted high-cardinality encoder
    target: Arc<dyn TargetEncoder>,
    /// Missing-column behaviour
    policy: SchemaPolicy,
}

impl FeatureEncoder {
    /// Create an encoder with the strict schema policy
    pub fn new(target: Arc<dyn TargetEncoder>) -> Self {
        Self {
            target,
            policy: SchemaPolicy::Strict,
        }
    }

    /// Set the missing-column policy
    pub fn with_policy(mut self, policy: SchemaPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current missing-column policy
    pub fn policy(&self) -> SchemaPolicy {
        self.policy
    }

    /// Encode a query. Either every column is produced or the call fails.
    pub fn encode(&self, query: &FlightQuery) -> Result<FeatureVector, EncodingError> {
        let time_of_day = TimeOfDay::from_departure_time(query.departure_time);
        let distance = DistanceCategory::from_distance(query.distance);

        let columns = CategoricalColumns::from_query(query);
        let encoded = self.target.transform(&columns)?;

        debug!(
            "Encoding {}: time_of_day={}, distance={}, day_month={}",
            query.carrier_origin(),
            time_of_day.as_str(),
            distance.as_str(),
            query.day_month()
        );

        let [dep_time_afternoon, dep_time_evening, dep_time_morning, dep_time_night] =
            time_of_day.one_hot();
        let [distance_long, distance_medium, distance_short] = distance.one_hot();

        Ok(FeatureVector {
            month: f64::from(query.month),
            day_of_month: f64::from(query.day_of_month),
            day_of_week: f64::from(query.day_of_week),
            unique_carrier: self.column(&encoded, CategoricalColumn::UniqueCarrier)?,
            origin: self.column(&encoded, CategoricalColumn::Origin)?,
            dest: self.column(&encoded, CategoricalColumn::Dest)?,
            dep_time_afternoon,
            dep_time_evening,
            dep_time_morning,
            dep_time_night,
            distance_long,
            distance_medium,
            distance_short,
            carrier_origin: self.column(&encoded, CategoricalColumn::CarrierOrigin)?,
            carrier_dest: self.column(&encoded, CategoricalColumn::CarrierDest)?,
            day_month: self.column(&encoded, CategoricalColumn::DayMonth)?,
        })
    }

    fn column(
        &self,
        encoded: &EncodedColumns,
        column: CategoricalColumn,
    ) -> Result<f64, EncodingError> {
        match (encoded.get(&column).copied(), self.policy) {
            (Some(value), _) if value.is_finite() => Ok(value),
            (Some(value), SchemaPolicy::ZeroFill) => {
                warn!("Target encoder returned {} for {}, filling with 0", value, column.name());
                Ok(0.0)
            }
            (Some(value), SchemaPolicy::Strict) => Err(EncodingError::EncodingFailure(format!(
                "target encoder returned {} for {}",
                value,
                column.name()
            ))),
            (None, SchemaPolicy::ZeroFill) => {
                warn!("Target encoder returned no {}, filling with 0", column.name());
                Ok(0.0)
            }
            (None, SchemaPolicy::Strict) => Err(EncodingError::SchemaMismatch(format!(
                "target encoder returned no value for {}",
                column.name()
            ))),
        }
    }
}
