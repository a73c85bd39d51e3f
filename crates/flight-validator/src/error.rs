//! Validation Error Types

use thiserror::Error;

/// Errors during query validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Carrier not in the catalog
    #[error("Unknown carrier code: {0}")]
    UnknownCarrier(String),

    /// Airport not in the catalog
    #[error("Unknown {field} airport code: {code}")]
    UnknownAirport { field: &'static str, code: String },
}
