//! Encoding Error Types

use thiserror::Error;

/// Errors while turning a query into a feature vector
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// The target encoder could not transform the categorical batch
    #[error("Target encoding failed: {0}")]
    EncodingFailure(String),

    /// Produced or declared columns disagree with the classifier schema
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Encoder artifact could not be read or parsed
    #[error("Encoder artifact load failed: {0}")]
    ArtifactLoad(String),
}
