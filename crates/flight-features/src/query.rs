//! Flight Query Input

use serde::{Deserialize, Serialize};

/// Raw flight attributes as entered by the caller.
///
/// Nothing here is validated; see the `flight-validator` crate for the
/// range and catalog checks the input form applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    /// Month of year, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day_of_month: u8,
    /// Day of week, 1-7 (1 = Monday)
    pub day_of_week: u8,
    /// Scheduled departure as HHMM, 0-2359
    pub departure_time: u16,
    /// Airline code (e.g. "DL")
    pub carrier: String,
    /// Origin airport code
    pub origin: String,
    /// Destination airport code
    pub destination: String,
    /// Distance in miles
    pub distance: u32,
}

impl FlightQuery {
    /// `carrier_origin`, e.g. "DL_ATL"
    pub fn carrier_origin(&self) -> String {
        format!("{}_{}", self.carrier, self.origin)
    }

    /// `carrier_dest`, e.g. "DL_JFK"
    pub fn carrier_dest(&self) -> String {
        format!("{}_{}", self.carrier, self.destination)
    }

    /// Weekday and month joined as decimal text, e.g. "3_12"
    pub fn day_month(&self) -> String {
        format!("{}_{}", self.day_of_week, self.month)
    }
}
