use std::collections::HashMap;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detector::features::{extract_features, CipherFeatures};
use crate::detector::synthesis::{generate_sample, ALGORITHMS};
use crate::error::DetectError;

/// One labeled sample: the feature vector of a fabricated ciphertext and
/// the algorithm label that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub features: CipherFeatures,
    pub algorithm: String,
}

/// Labeled feature collection fed to the classification workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub examples: Vec<TrainingExample>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.examples.iter().map(|e| e.features.to_vector()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.algorithm.clone()).collect()
    }

    /// Sample count per label.
    pub fn class_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for example in &self.examples {
            *counts.entry(example.algorithm.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Builds a labeled dataset by repeatedly fabricating samples and
/// extracting their features.
pub struct DatasetBuilder {
    sample_count: usize,
}

impl DatasetBuilder {
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }

    /// Generates `sample_count` examples, choosing a label uniformly at
    /// random for each. Labels repeat and feature vectors may collide
    /// across labels, the generation is purely statistical.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Dataset, DetectError> {
        let pb = ProgressBar::new(self.sample_count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.green/black} {pos}/{len} samples",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ "),
        );

        let mut examples = Vec::with_capacity(self.sample_count);

        for _ in 0..self.sample_count {
            let algorithm = ALGORITHMS[rng.gen_range(0..ALGORITHMS.len())];
            let ciphertext = generate_sample(rng, algorithm);
            let features = extract_features(&ciphertext)?;

            examples.push(TrainingExample {
                features,
                algorithm: algorithm.to_string(),
            });
            pb.inc(1);
        }

        pb.finish_and_clear();

        let dataset = Dataset { examples };
        debug!(samples = dataset.len(), classes = ?dataset.class_counts(), "dataset built");

        Ok(dataset)
    }
}
