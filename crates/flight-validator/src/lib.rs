//! Flight Query Validation
//!
//! Range checks and catalog membership for flight queries, applied at the
//! input boundary before encoding.

mod catalog;
mod error;
mod validator;

pub use catalog::{
    is_known_airport, is_known_carrier, month_from_name, weekday_from_name, AIRPORT_CODES,
    CARRIER_CODES, MONTH_NAMES, WEEKDAY_NAMES,
};
pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
