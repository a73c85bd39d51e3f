//! Flight Delay Predictor - Main Entry Point
//!
//! Reads one JSON flight query per stdin line and writes one JSON outcome
//! per stdout line. An optional first argument names the config file.

use delay_predictor::{init_logging, respond, FlightDelayPredictor, PredictorConfig};
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config = PredictorConfig::load(config_path.as_deref())?;
    init_logging(config.log_json)?;

    info!("=== Flight Delay Predictor v{} ===", env!("CARGO_PKG_VERSION"));

    let predictor = FlightDelayPredictor::from_config(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut served = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = respond(&predictor, &line);

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
        served += 1;
    }

    info!("Input closed after {} queries", served);
    Ok(())
}
