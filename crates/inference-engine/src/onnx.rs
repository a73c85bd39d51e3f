//! ONNX Classifier using tract

use crate::engine::{Classifier, DelayLabel, Prediction};
use crate::InferenceError;
use flight_features::{FeatureVector, FEATURE_DIMENSION};
use std::path::Path;
use tracing::{debug, info};
use tract_onnx::prelude::*;

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// Classifier exported to ONNX (e.g. a scikit-learn pipeline).
///
/// The first graph output must be the class label tensor.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    name: String,
}

impl OnnxClassifier {
    /// Load and optimize an ONNX model with a `[1, 16]` f32 input
    pub fn from_path(path: &Path) -> Result<Self, InferenceError> {
        info!("Loading ONNX classifier from {}", path.display());

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into())
            })
            .and_then(|model| model.into_typed())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        let classifier = Self::from_model(model, format!("onnx({})", path.display()))?;
        info!("ONNX model loaded successfully");
        Ok(classifier)
    }

    /// Optimize an already-typed graph and make it runnable
    pub fn from_model(model: TypedModel, name: impl Into<String>) -> Result<Self, InferenceError> {
        let name = name.into();
        let plan = model
            .into_optimized()
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", name, e)))?;

        Ok(Self { plan, name })
    }

    fn run(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let failed = |e: TractError| InferenceError::InferenceFailed(e.to_string());

        let values = features.to_f32_vec();
        let input = Tensor::from_shape(&[1, FEATURE_DIMENSION], values.as_slice()).map_err(failed)?;
        let outputs = self.plan.run(tvec!(input.into())).map_err(failed)?;

        let labels = outputs[0].cast_to::<i64>().map_err(failed)?;
        labels
            .as_slice::<i64>()
            .map_err(failed)?
            .first()
            .copied()
            .ok_or_else(|| InferenceError::InferenceFailed("empty label output".to_string()))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        let start = std::time::Instant::now();

        if let Some((name, value)) = features.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InferenceError::InferenceFailed(format!(
                "non-finite input {}={}",
                name, value
            )));
        }

        let label = DelayLabel::from_class(self.run(features)?)?;

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("ONNX prediction: {:?} in {}us", label, latency_us);

        Ok(Prediction {
            label,
            probability: None,
            latency_us,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
