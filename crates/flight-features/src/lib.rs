//! Flight Feature Encoding
//!
//! Turns one [`FlightQuery`] into the fixed 16-column [`FeatureVector`] the
//! delay classifier was trained on.

mod buckets;
mod encoder;
mod error;
mod query;
mod target;
mod vector;

pub use buckets::{DistanceCategory, TimeOfDay};
pub use encoder::{FeatureEncoder, SchemaPolicy};
pub use error::EncodingError;
pub use query::FlightQuery;
pub use target::{
    CategoricalColumn, CategoricalColumns, EncodedColumns, FittedTargetEncoder, HandleUnknown,
    TargetEncoder,
};
pub use vector::{verify_schema, FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
