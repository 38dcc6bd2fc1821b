pub mod dataset;
pub mod entropy;
pub mod features;
pub mod model;
pub mod synthesis;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use statrs::statistics::Statistics;
use tracing::info;

use crate::error::DetectError;
pub use dataset::{Dataset, DatasetBuilder, TrainingExample};
pub use features::{extract_features, CipherFeatures};
pub use model::{Classifier, LabelEncoder, RandomForestModel};
pub use synthesis::{algorithm_description, generate_sample, ALGORITHMS};

/// Share of the dataset held out for evaluation.
pub const TEST_FRACTION: f32 = 0.2;

/// Seed for the train/test shuffle, fixed for reproducible splits.
pub const SPLIT_SEED: u64 = 42;

/// Classification workflow: owns the classifier, trains it on a labeled
/// dataset, and answers inference queries against the trained model.
pub struct Detector {
    classifier: Box<dyn Classifier>,
    encoder: Option<LabelEncoder>,
    test_fraction: f32,
    split_seed: u64,
    accuracy: Option<f64>,
    training_samples: usize,
}

impl Detector {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            encoder: None,
            test_fraction: TEST_FRACTION,
            split_seed: SPLIT_SEED,
            accuracy: None,
            training_samples: 0,
        }
    }

    pub fn with_split(mut self, test_fraction: f32, split_seed: u64) -> Self {
        self.test_fraction = test_fraction;
        self.split_seed = split_seed;
        self
    }

    /// Splits the dataset 80/20 with a seeded shuffle, fits the
    /// classifier on the train partition, and returns the exact-match
    /// accuracy measured on the held-out partition.
    ///
    /// Fails with [`DetectError::DegenerateDataset`] when fewer than two
    /// distinct labels are present, a classifier cannot learn from one
    /// class.
    pub fn train(&mut self, dataset: &Dataset) -> Result<f64, DetectError> {
        let labels = dataset.labels();
        let encoder = LabelEncoder::fit(&labels);

        if encoder.len() < 2 {
            return Err(DetectError::DegenerateDataset {
                classes: encoder.len(),
            });
        }

        let matrix = dataset.feature_matrix();
        let classes: Vec<u32> = labels.iter().filter_map(|l| encoder.encode(l)).collect();
        debug_assert_eq!(classes.len(), labels.len());

        let mut indices: Vec<usize> = (0..dataset.len()).collect();
        let mut rng = StdRng::seed_from_u64(self.split_seed);
        indices.shuffle(&mut rng);

        let test_len = ((dataset.len() as f32) * self.test_fraction).ceil() as usize;
        let test_len = test_len.clamp(1, dataset.len() - 1);
        let (test_idx, train_idx) = indices.split_at(test_len);

        let train_x: Vec<Vec<f64>> = train_idx.iter().map(|&i| matrix[i].clone()).collect();
        let train_y: Vec<u32> = train_idx.iter().map(|&i| classes[i]).collect();
        let test_x: Vec<Vec<f64>> = test_idx.iter().map(|&i| matrix[i].clone()).collect();
        let test_y: Vec<u32> = test_idx.iter().map(|&i| classes[i]).collect();

        self.classifier.fit(&train_x, &train_y)?;

        let predicted = self.classifier.predict(&test_x)?;
        let hits: Vec<f64> = predicted
            .iter()
            .zip(test_y.iter())
            .map(|(p, t)| if p == t { 1.0 } else { 0.0 })
            .collect();
        let accuracy = hits.iter().mean();

        info!(
            samples = dataset.len(),
            classes = encoder.len(),
            accuracy,
            "classifier trained"
        );

        self.training_samples = dataset.len();
        self.encoder = Some(encoder);
        self.accuracy = Some(accuracy);

        Ok(accuracy)
    }

    /// Extracts features from a raw ciphertext and returns the model's
    /// single top prediction. No confidence threshold is applied.
    pub fn identify(&self, ciphertext: &str) -> Result<String, DetectError> {
        let encoder = self.encoder.as_ref().ok_or(DetectError::NotTrained)?;

        let features = extract_features(ciphertext)?;
        let predicted = self.classifier.predict(&[features.to_vector()])?;

        let class = predicted
            .first()
            .copied()
            .ok_or_else(|| DetectError::Classifier("empty prediction".to_string()))?;

        let label = encoder
            .decode(class)
            .ok_or_else(|| DetectError::Classifier(format!("unknown class index {class}")))?;

        Ok(label.to_string())
    }

    /// Accuracy of the last training run, if any.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn model_stats(&self) -> HashMap<String, serde_json::Value> {
        let mut stats = HashMap::new();

        stats.insert(
            "training_samples".to_string(),
            serde_json::Value::Number(self.training_samples.into()),
        );

        if let Some(encoder) = &self.encoder {
            stats.insert(
                "classes".to_string(),
                serde_json::Value::Array(
                    encoder
                        .classes()
                        .iter()
                        .map(|c| serde_json::Value::String(c.clone()))
                        .collect(),
                ),
            );
        }

        if let Some(accuracy) = self.accuracy {
            stats.insert(
                "accuracy".to_string(),
                serde_json::Value::Number(
                    serde_json::Number::from_f64(accuracy)
                        .unwrap_or_else(|| serde_json::Number::from(0)),
                ),
            );
        }

        stats.insert(
            "test_fraction".to_string(),
            serde_json::Value::Number(
                serde_json::Number::from_f64(self.test_fraction as f64)
                    .unwrap_or_else(|| serde_json::Number::from(0)),
            ),
        );

        stats
    }
}
