//! Logistic Regression Classifier

use crate::engine::{Classifier, DelayLabel, Prediction};
use crate::InferenceError;
use flight_features::{FeatureVector, FEATURE_DIMENSION};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

fn default_threshold() -> f64 {
    0.5
}

/// On-disk layout of an exported logistic model
#[derive(Debug, Deserialize)]
struct LogisticArtifact {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

/// Linear model over the feature vector; p(on time) = sigmoid(w·x + b)
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
    name: String,
}

impl LogisticClassifier {
    /// Create a classifier from exported weights
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, InferenceError> {
        if coefficients.len() != FEATURE_DIMENSION {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("{} coefficients", FEATURE_DIMENSION),
                actual: format!("{} coefficients", coefficients.len()),
            });
        }
        if feature_names.len() != coefficients.len() {
            return Err(InferenceError::ModelLoadError(format!(
                "{} feature names for {} coefficients",
                feature_names.len(),
                coefficients.len()
            )));
        }

        Ok(Self {
            name: format!("logistic({} features)", coefficients.len()),
            feature_names,
            coefficients,
            intercept,
            threshold: default_threshold(),
        })
    }

    /// Set the on-time probability threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Parse an exported model from JSON
    pub fn from_json_str(json: &str) -> Result<Self, InferenceError> {
        let artifact: LogisticArtifact = serde_json::from_str(json)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        Ok(Self::new(artifact.feature_names, artifact.coefficients, artifact.intercept)?
            .with_threshold(artifact.threshold))
    }

    /// Load an exported model from disk
    pub fn from_path(path: &Path) -> Result<Self, InferenceError> {
        info!("Loading logistic classifier from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// On-time probability for a feature vector
    pub fn probability(&self, features: &FeatureVector) -> f64 {
        let z = features
            .to_array()
            .iter()
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, (x, w)| acc + x * w);
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        let start = std::time::Instant::now();

        let probability = self.probability(features);
        if !probability.is_finite() {
            return Err(InferenceError::InferenceFailed(
                "non-finite probability, check encoded inputs".to_string(),
            ));
        }

        let label = if probability >= self.threshold {
            DelayLabel::OnTime
        } else {
            DelayLabel::Delayed
        };

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("Logistic prediction: {:?} (p={:.3})", label, probability);

        Ok(Prediction {
            label,
            probability: Some(probability),
            latency_us,
        })
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.feature_names)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_features::FEATURE_NAMES;

    fn names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_intercept_only_model() {
        let on_time = LogisticClassifier::new(names(), vec![0.0; 16], 2.0).unwrap();
        let delayed = LogisticClassifier::new(names(), vec![0.0; 16], -2.0).unwrap();
        let features = FeatureVector::default();

        let prediction = on_time.predict(&features).unwrap();
        assert_eq!(prediction.label, DelayLabel::OnTime);
        assert!(prediction.probability.unwrap() > 0.8);

        assert_eq!(delayed.predict(&features).unwrap().label, DelayLabel::Delayed);
    }

    #[test]
    fn test_weights_follow_column_order() {
        let mut coefficients = vec![0.0; 16];
        // DepTimeOfDay_Night pushes towards delay
        coefficients[9] = -5.0;
        let model = LogisticClassifier::new(names(), coefficients, 1.0).unwrap();

        let morning = FeatureVector {
            dep_time_morning: 1.0,
            ..Default::default()
        };
        let night = FeatureVector {
            dep_time_night: 1.0,
            ..Default::default()
        };
        assert_eq!(model.predict(&morning).unwrap().label, DelayLabel::OnTime);
        assert_eq!(model.predict(&night).unwrap().label, DelayLabel::Delayed);
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let err = LogisticClassifier::new(names(), vec![0.0; 15], 0.0).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidInputShape { .. }));
    }

    #[test]
    fn test_nan_input_fails() {
        let model = LogisticClassifier::new(names(), vec![1.0; 16], 0.0).unwrap();
        let features = FeatureVector {
            origin: f64::NAN,
            ..Default::default()
        };
        assert!(model.predict(&features).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let json = format!(
            r#"{{"feature_names": {:?}, "coefficients": {:?}, "intercept": 0.3, "threshold": 0.6}}"#,
            FEATURE_NAMES,
            vec![0.0; 16]
        );
        let model = LogisticClassifier::from_json_str(&json).unwrap();
        assert_eq!(model.feature_names().unwrap().len(), 16);
        // sigmoid(0.3) ~= 0.574, below the 0.6 threshold
        let prediction = model.predict(&FeatureVector::default()).unwrap();
        assert_eq!(prediction.label, DelayLabel::Delayed);
    }
}
