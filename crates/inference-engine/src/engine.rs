//! Classifier Contract

use crate::logistic::LogisticClassifier;
use crate::onnx::OnnxClassifier;
use crate::InferenceError;
use flight_features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Binary delay outcome, numbered as the classifier emits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayLabel {
    /// Class 0
    Delayed,
    /// Class 1
    OnTime,
}

impl DelayLabel {
    /// Map a raw class id. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Result<Self, InferenceError> {
        match class {
            0 => Ok(DelayLabel::Delayed),
            1 => Ok(DelayLabel::OnTime),
            other => Err(InferenceError::InferenceFailed(format!(
                "unexpected class label {}",
                other
            ))),
        }
    }

    /// Raw class id
    pub fn as_class(&self) -> u8 {
        match self {
            DelayLabel::Delayed => 0,
            DelayLabel::OnTime => 1,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayLabel::Delayed => "delayed",
            DelayLabel::OnTime => "on_time",
        }
    }

    /// Message shown to the traveller
    pub fn message(&self) -> &'static str {
        match self {
            DelayLabel::Delayed => "The flight will be delayed.",
            DelayLabel::OnTime => "The flight will be on time!",
        }
    }
}

/// Prediction result from a classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label
    pub label: DelayLabel,
    /// Probability of the on-time class, when the model exposes one
    pub probability: Option<f64>,
    /// Inference latency in microseconds
    pub latency_us: u64,
}

/// Pre-trained delay classifier.
///
/// Loaded once and shared read-only between callers.
pub trait Classifier: Send + Sync {
    /// Classify one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError>;

    /// Input column names, when the model artifact declares them
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Short model description for logs
    fn name(&self) -> &str;
}

/// Load a classifier, choosing the backend by file extension
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>, InferenceError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let classifier: Arc<dyn Classifier> = match extension.as_deref() {
        Some("onnx") => Arc::new(OnnxClassifier::from_path(path)?),
        Some("json") => Arc::new(LogisticClassifier::from_path(path)?),
        _ => {
            return Err(InferenceError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    info!("Classifier ready: {}", classifier.name());
    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_class() {
        assert_eq!(DelayLabel::from_class(0).unwrap(), DelayLabel::Delayed);
        assert_eq!(DelayLabel::from_class(1).unwrap(), DelayLabel::OnTime);
        assert!(DelayLabel::from_class(2).is_err());
        assert!(DelayLabel::from_class(-1).is_err());
    }

    #[test]
    fn test_label_messages() {
        assert_eq!(DelayLabel::OnTime.message(), "The flight will be on time!");
        assert_eq!(DelayLabel::Delayed.message(), "The flight will be delayed.");
        assert_eq!(DelayLabel::OnTime.as_class(), 1);
        assert_eq!(DelayLabel::Delayed.as_class(), 0);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_classifier("model.pkl").err().unwrap();
        assert!(matches!(err, InferenceError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_model_file() {
        let err = load_classifier("/nonexistent/model.json").err().unwrap();
        assert!(matches!(err, InferenceError::ModelLoadError(_)));
    }
}
