//! Flight Delay Predictor
//!
//! Wires the target encoder, feature encoder and classifier into one
//! read-only service. Artifacts are loaded once at startup and shared.

pub mod config;

use flight_features::{
    verify_schema, EncodingError, FeatureEncoder, FeatureVector, FittedTargetEncoder,
    FlightQuery, SchemaPolicy, TargetEncoder,
};
use flight_validator::{ValidationError, Validator};
use inference_engine::{load_classifier, Classifier, DelayLabel, InferenceError};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub use crate::config::PredictorConfig;

/// Errors from the prediction pipeline
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Invalid query: {}", format_validation(.0))]
    InvalidQuery(Vec<ValidationError>),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of one prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    /// Raw class id (0 = delayed, 1 = on time)
    pub label: u8,
    /// Named label
    pub status: DelayLabel,
    /// Message for the traveller
    pub message: &'static str,
    /// On-time probability, when the classifier exposes one
    pub probability: Option<f64>,
    /// The vector the classifier saw
    pub features: FeatureVector,
    /// Classifier latency in microseconds
    pub latency_us: u64,
}

/// Encoder and classifier pair held for the process lifetime
pub struct FlightDelayPredictor {
    encoder: FeatureEncoder,
    classifier: Arc<dyn Classifier>,
    validator: Option<Validator>,
}

impl FlightDelayPredictor {
    /// Build from already-loaded handles.
    ///
    /// Fails when the classifier declares input columns that differ from
    /// the encoder's output.
    pub fn new(
        target: Arc<dyn TargetEncoder>,
        classifier: Arc<dyn Classifier>,
        policy: SchemaPolicy,
    ) -> Result<Self, PredictorError> {
        match classifier.feature_names() {
            Some(names) => verify_schema(names)?,
            None => debug!("{} declares no feature names, skipping schema check", classifier.name()),
        }

        Ok(Self {
            encoder: FeatureEncoder::new(target).with_policy(policy),
            classifier,
            validator: Some(Validator::default()),
        })
    }

    /// Replace the input validator; `None` trusts the caller
    pub fn with_validator(mut self, validator: Option<Validator>) -> Self {
        self.validator = validator;
        self
    }

    /// Load both artifacts named by the config
    pub fn from_config(config: &PredictorConfig) -> Result<Self, PredictorError> {
        let target = Arc::new(FittedTargetEncoder::from_path(&config.encoder_path)?);
        let classifier = load_classifier(&config.classifier_path)?;

        let validator = config.validate_input.then(Validator::default);
        let predictor =
            Self::new(target, classifier, config.schema_policy)?.with_validator(validator);

        info!(
            "Predictor ready: classifier={}, schema_policy={:?}, validate_input={}",
            predictor.classifier.name(),
            config.schema_policy,
            config.validate_input
        );
        Ok(predictor)
    }

    /// Validate, encode and classify one query
    pub fn predict(&self, query: &FlightQuery) -> Result<PredictionOutcome, PredictorError> {
        let result = self.predict_inner(query);

        match &result {
            Ok(outcome) => {
                metrics::counter!("flight_predictions_total", "label" => outcome.status.as_str())
                    .increment(1);
                metrics::histogram!("flight_prediction_latency_us")
                    .record(outcome.latency_us as f64);
            }
            Err(e) => {
                metrics::counter!("flight_prediction_errors_total").increment(1);
                debug!("Prediction failed: {}", e);
            }
        }

        result
    }

    fn predict_inner(&self, query: &FlightQuery) -> Result<PredictionOutcome, PredictorError> {
        if let Some(validator) = &self.validator {
            let validation = validator.validate(query);
            if !validation.valid {
                return Err(PredictorError::InvalidQuery(validation.errors));
            }
        }

        let features = self.encoder.encode(query)?;
        let prediction = self.classifier.predict(&features)?;

        debug!(
            "{} {} -> {}: {:?}",
            query.carrier, query.origin, query.destination, prediction.label
        );

        Ok(PredictionOutcome {
            label: prediction.label.as_class(),
            status: prediction.label,
            message: prediction.label.message(),
            probability: prediction.probability,
            features,
            latency_us: prediction.latency_us,
        })
    }
}

/// Answer one input line: the outcome, or an `{"error": ...}` object
pub fn respond(predictor: &FlightDelayPredictor, line: &str) -> serde_json::Value {
    let query = match serde_json::from_str::<FlightQuery>(line) {
        Ok(query) => query,
        Err(e) => {
            warn!("Unparseable query: {}", e);
            return json!({ "error": format!("invalid query JSON: {}", e) });
        }
    };

    match predictor.predict(&query) {
        Ok(outcome) => serde_json::to_value(&outcome)
            .unwrap_or_else(|e| json!({ "error": format!("unserializable outcome: {}", e) })),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

/// Initialize logging on stderr
pub fn init_logging(json: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let builder = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}
