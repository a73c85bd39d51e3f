//! Delay Classification
//!
//! Classifier contract plus the artifact-backed models that satisfy it.

mod engine;
mod logistic;
mod onnx;

pub use engine::{load_classifier, Classifier, DelayLabel, Prediction};
pub use logistic::LogisticClassifier;
pub use onnx::OnnxClassifier;

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),
}
