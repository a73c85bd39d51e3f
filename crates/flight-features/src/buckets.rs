//! Low-Cardinality Buckets
//!
//! Departure time and distance are bucketed and then one-hot expanded.
//! Category order inside each group follows the classifier's column order
//! (alphabetical, as the training pipeline emitted its dummies).

use serde::{Deserialize, Serialize};

/// Departure time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Afternoon,
    Evening,
    Morning,
    Night,
}

impl TimeOfDay {
    /// All buckets in one-hot column order
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Morning,
        TimeOfDay::Night,
    ];

    /// Bucket an HHMM departure time. Minutes are not checked, so 1375 is
    /// simply an afternoon departure.
    pub fn from_departure_time(hhmm: u16) -> Self {
        match hhmm {
            500..=1199 => TimeOfDay::Morning,
            1200..=1699 => TimeOfDay::Afternoon,
            1700..=2099 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Night => "Night",
        }
    }

    /// Indicator values for `DepTimeOfDay_{Afternoon,Evening,Morning,Night}`
    pub fn one_hot(&self) -> [f64; 4] {
        Self::ALL.map(|bucket| if bucket == *self { 1.0 } else { 0.0 })
    }
}

/// Flight distance bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceCategory {
    Long,
    Medium,
    Short,
}

impl DistanceCategory {
    /// All buckets in one-hot column order
    pub const ALL: [DistanceCategory; 3] = [
        DistanceCategory::Long,
        DistanceCategory::Medium,
        DistanceCategory::Short,
    ];

    /// Bucket a distance in miles
    pub fn from_distance(miles: u32) -> Self {
        match miles {
            0..=499 => DistanceCategory::Short,
            500..=1499 => DistanceCategory::Medium,
            _ => DistanceCategory::Long,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceCategory::Long => "Long",
            DistanceCategory::Medium => "Medium",
            DistanceCategory::Short => "Short",
        }
    }

    /// Indicator values for `DistanceCategory_{Long,Medium,Short}`
    pub fn one_hot(&self) -> [f64; 3] {
        Self::ALL.map(|bucket| if bucket == *self { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_time_of_day_boundaries() {
        let cases = [
            (0, TimeOfDay::Night),
            (15, TimeOfDay::Night),
            (499, TimeOfDay::Night),
            (500, TimeOfDay::Morning),
            (1199, TimeOfDay::Morning),
            (1200, TimeOfDay::Afternoon),
            (1375, TimeOfDay::Afternoon),
            (1699, TimeOfDay::Afternoon),
            (1700, TimeOfDay::Evening),
            (2099, TimeOfDay::Evening),
            (2100, TimeOfDay::Night),
            (2359, TimeOfDay::Night),
        ];
        for (hhmm, expected) in cases {
            assert_eq!(TimeOfDay::from_departure_time(hhmm), expected, "hhmm={}", hhmm);
        }
    }

    #[test]
    fn test_distance_boundaries() {
        assert_eq!(DistanceCategory::from_distance(1), DistanceCategory::Short);
        assert_eq!(DistanceCategory::from_distance(499), DistanceCategory::Short);
        assert_eq!(DistanceCategory::from_distance(500), DistanceCategory::Medium);
        assert_eq!(DistanceCategory::from_distance(1499), DistanceCategory::Medium);
        assert_eq!(DistanceCategory::from_distance(1500), DistanceCategory::Long);
        assert_eq!(DistanceCategory::from_distance(10_000), DistanceCategory::Long);
    }

    #[test]
    fn test_one_hot_layout() {
        assert_eq!(TimeOfDay::Morning.one_hot(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(TimeOfDay::Night.one_hot(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(DistanceCategory::Medium.one_hot(), [0.0, 1.0, 0.0]);
        assert_eq!(DistanceCategory::Long.one_hot(), [1.0, 0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_time_indicator(hhmm in 0u16..=2359) {
            let indicators = TimeOfDay::from_departure_time(hhmm).one_hot();
            prop_assert_eq!(indicators.iter().filter(|v| **v == 1.0).count(), 1);
            prop_assert!(indicators.iter().all(|v| *v == 0.0 || *v == 1.0));
        }

        #[test]
        fn prop_exactly_one_distance_indicator(miles in 1u32..=10_000) {
            let indicators = DistanceCategory::from_distance(miles).one_hot();
            prop_assert_eq!(indicators.iter().filter(|v| **v == 1.0).count(), 1);
        }
    }
}
