//! Query Validator for Range and Catalog Checks

use crate::catalog::{is_known_airport, is_known_carrier};
use crate::error::ValidationError;
use flight_features::FlightQuery;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Month valid range
    pub month_range: (u32, u32),
    /// Day-of-month valid range
    pub day_of_month_range: (u32, u32),
    /// Day-of-week valid range (Monday = 1)
    pub day_of_week_range: (u32, u32),
    /// Departure time valid range (HHMM)
    pub departure_time_range: (u32, u32),
    /// Distance valid range (miles)
    pub distance_range: (u32, u32),
    /// Reject carrier and airport codes outside the catalog
    pub check_catalog: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            month_range: (1, 12),
            day_of_month_range: (1, 31),
            day_of_week_range: (1, 7),
            departure_time_range: (0, 2359),
            distance_range: (1, 10_000),
            check_catalog: true,
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for flight queries
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: u32,
        range: (u32, u32),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a carrier code
    pub fn validate_carrier(&self, code: &str) -> Result<(), ValidationError> {
        if !self.config.check_catalog || is_known_carrier(code) {
            Ok(())
        } else {
            Err(ValidationError::UnknownCarrier(code.to_string()))
        }
    }

    /// Validate an airport code for the named field
    pub fn validate_airport(&self, field: &'static str, code: &str) -> Result<(), ValidationError> {
        if !self.config.check_catalog || is_known_airport(code) {
            Ok(())
        } else {
            Err(ValidationError::UnknownAirport {
                field,
                code: code.to_string(),
            })
        }
    }

    /// Validate every field of a query, collecting all violations.
    ///
    /// The departure time is only range-checked: HHMM values with minutes
    /// above 59 are accepted.
    pub fn validate(&self, query: &FlightQuery) -> ValidationResult {
        let checks = [
            self.validate_range("month", query.month.into(), self.config.month_range),
            self.validate_range(
                "day_of_month",
                query.day_of_month.into(),
                self.config.day_of_month_range,
            ),
            self.validate_range(
                "day_of_week",
                query.day_of_week.into(),
                self.config.day_of_week_range,
            ),
            self.validate_range(
                "departure_time",
                query.departure_time.into(),
                self.config.departure_time_range,
            ),
            self.validate_range("distance", query.distance, self.config.distance_range),
            self.validate_carrier(&query.carrier),
            self.validate_airport("origin", &query.origin),
            self.validate_airport("destination", &query.destination),
        ];

        let fields_checked = checks.len();
        let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            debug!("Query rejected with {} validation errors", errors.len());
            ValidationResult::invalid(errors, fields_checked)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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
    fn test_valid_query() {
        let result = Validator::default().validate(&query());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.fields_checked, 8);
    }

    #[test]
    fn test_unchecked_minutes_are_accepted() {
        let result = Validator::default().validate(&FlightQuery {
            departure_time: 1375,
            ..query()
        });
        assert!(result.valid);
    }

    #[test]
    fn test_collects_every_violation() {
        let result = Validator::default().validate(&FlightQuery {
            month: 13,
            day_of_week: 0,
            departure_time: 2400,
            distance: 0,
            carrier: "ZZ".to_string(),
            destination: "XXX".to_string(),
            ..query()
        });
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 6);
        assert!(result.errors.contains(&ValidationError::UnknownCarrier("ZZ".to_string())));
        assert!(result.errors.contains(&ValidationError::UnknownAirport {
            field: "destination",
            code: "XXX".to_string(),
        }));
    }

    #[test]
    fn test_catalog_check_can_be_disabled() {
        let validator = Validator::new(ValidationConfig {
            check_catalog: false,
            ..Default::default()
        });
        let result = validator.validate(&FlightQuery {
            carrier: "ZZ".to_string(),
            origin: "QQQ".to_string(),
            ..query()
        });
        assert!(result.valid);
    }

    #[test]
    fn test_range_error_message() {
        let err = Validator::default()
            .validate_range("distance", 20_000, (1, 10_000))
            .unwrap_err();
        assert_eq!(err.to_string(), "distance value 20000 is out of range [1, 10000]");
    }

    proptest! {
        #[test]
        fn prop_in_range_departure_times_pass(hhmm in 0u16..=2359) {
            let result = Validator::default().validate(&FlightQuery {
                departure_time: hhmm,
                ..query()
            });
            prop_assert!(result.valid);
        }
    }
}
