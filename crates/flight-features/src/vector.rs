//! Feature Vector Assembly

use crate::error::EncodingError;
use serde::{Deserialize, Serialize};

/// Number of features the classifier consumes
pub const FEATURE_DIMENSION: usize = 16;

/// Column names in classifier order. Field order of [`FeatureVector`]
/// must match this list exactly.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "Month",
    "DayofMonth",
    "DayOfWeek",
    "UniqueCarrier",
    "Origin",
    "Dest",
    "DepTimeOfDay_Afternoon",
    "DepTimeOfDay_Evening",
    "DepTimeOfDay_Morning",
    "DepTimeOfDay_Night",
    "DistanceCategory_Long",
    "DistanceCategory_Medium",
    "DistanceCategory_Short",
    "Carrier_Origin",
    "Carrier_Dest",
    "Day_Month",
];

/// Feature vector for delay classification.
///
/// Serializes as an object whose keys are [`FEATURE_NAMES`] in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Month")]
    pub month: f64,
    #[serde(rename = "DayofMonth")]
    pub day_of_month: f64,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: f64,
    /// Target-encoded carrier
    #[serde(rename = "UniqueCarrier")]
    pub unique_carrier: f64,
    /// Target-encoded origin airport
    #[serde(rename = "Origin")]
    pub origin: f64,
    /// Target-encoded destination airport
    #[serde(rename = "Dest")]
    pub dest: f64,
    #[serde(rename = "DepTimeOfDay_Afternoon")]
    pub dep_time_afternoon: f64,
    #[serde(rename = "DepTimeOfDay_Evening")]
    pub dep_time_evening: f64,
    #[serde(rename = "DepTimeOfDay_Morning")]
    pub dep_time_morning: f64,
    #[serde(rename = "DepTimeOfDay_Night")]
    pub dep_time_night: f64,
    #[serde(rename = "DistanceCategory_Long")]
    pub distance_long: f64,
    #[serde(rename = "DistanceCategory_Medium")]
    pub distance_medium: f64,
    #[serde(rename = "DistanceCategory_Short")]
    pub distance_short: f64,
    /// Target-encoded carrier/origin interaction
    #[serde(rename = "Carrier_Origin")]
    pub carrier_origin: f64,
    /// Target-encoded carrier/destination interaction
    #[serde(rename = "Carrier_Dest")]
    pub carrier_dest: f64,
    /// Target-encoded weekday/month interaction
    #[serde(rename = "Day_Month")]
    pub day_month: f64,
}

impl FeatureVector {
    /// Values in [`FEATURE_NAMES`] order
    pub fn to_array(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.month,
            self.day_of_month,
            self.day_of_week,
            self.unique_carrier,
            self.origin,
            self.dest,
            self.dep_time_afternoon,
            self.dep_time_evening,
            self.dep_time_morning,
            self.dep_time_night,
            self.distance_long,
            self.distance_medium,
            self.distance_short,
            self.carrier_origin,
            self.carrier_dest,
            self.day_month,
        ]
    }

    /// Values as `f32`, the dtype most exported models take
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.to_array().iter().map(|v| *v as f32).collect()
    }

    /// `(name, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }

    /// Look up a value by column name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// Check a classifier's declared input columns against [`FEATURE_NAMES`].
///
/// Reports the first position that differs, or a length mismatch.
pub fn verify_schema<S: AsRef<str>>(expected: &[S]) -> Result<(), EncodingError> {
    if expected.len() != FEATURE_DIMENSION {
        return Err(EncodingError::SchemaMismatch(format!(
            "classifier expects {} features, encoder produces {}",
            expected.len(),
            FEATURE_DIMENSION
        )));
    }

    for (position, (wanted, produced)) in expected.iter().zip(FEATURE_NAMES).enumerate() {
        if wanted.as_ref() != produced {
            return Err(EncodingError::SchemaMismatch(format!(
                "column {} is '{}' in the classifier but '{}' in the encoder",
                position,
                wanted.as_ref(),
                produced
            )));
        }
    }

    Ok(())
}
