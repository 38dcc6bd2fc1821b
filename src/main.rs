use anyhow::Result;
use colored::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cipherscope::detector::{algorithm_description, generate_sample, DatasetBuilder, Detector};
use cipherscope::RandomForestModel;

/// Samples fabricated for the training run.
const TRAINING_SAMPLES: usize = 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();

    let dataset = DatasetBuilder::new(TRAINING_SAMPLES).build(&mut rng)?;

    let mut detector = Detector::new(Box::new(RandomForestModel::new()));
    let accuracy = detector.train(&dataset)?;
    debug!(stats = ?detector.model_stats(), "model stats");

    println!(
        "{} {}",
        "Model Accuracy:".bold(),
        format!("{:.2}%", accuracy * 100.0).green().bold()
    );

    let new_cipher = generate_sample(&mut rng, "AES");
    let predicted = detector.identify(&new_cipher)?;

    println!(
        "Predicted Algorithm for '{}': {}",
        new_cipher,
        predicted.cyan().bold()
    );

    if let Some(description) = algorithm_description(&predicted) {
        info!(algorithm = %predicted, "{description}");
    }

    Ok(())
}
