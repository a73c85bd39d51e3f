//! Predictor configuration

use config::{Config, ConfigError, Environment, File};
use flight_features::SchemaPolicy;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "flight-delay";

/// Environment variable prefix, e.g. `FLIGHT_DELAY_CLASSIFIER_PATH`
pub const ENV_PREFIX: &str = "FLIGHT_DELAY";

/// Predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Classifier artifact (`.onnx` or `.json`)
    pub classifier_path: String,

    /// Fitted target encoder artifact (`.json`)
    pub encoder_path: String,

    /// Behaviour when the target encoder omits a column
    pub schema_policy: SchemaPolicy,

    /// Range and catalog checks before encoding
    pub validate_input: bool,

    /// Emit JSON log lines
    pub log_json: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            classifier_path: "model.onnx".to_string(),
            encoder_path: "target_encoder.json".to_string(),
            schema_policy: SchemaPolicy::Strict,
            validate_input: true,
            log_json: false,
        }
    }
}

impl PredictorConfig {
    /// Layer defaults, an optional config file and `FLIGHT_DELAY_*`
    /// environment variables, in that order of precedence.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("classifier_path", defaults.classifier_path)?
            .set_default("encoder_path", defaults.encoder_path)?
            .set_default("schema_policy", "strict")?
            .set_default("validate_input", defaults.validate_input)?
            .set_default("log_json", defaults.log_json)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
