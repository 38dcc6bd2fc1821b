use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::DetectError;

/// The supervised-classification capability the workflow delegates to.
///
/// Implementations learn a mapping from feature rows to dense class
/// indices. Any conforming model works, which keeps tests free to swap
/// in a deterministic stub.
pub trait Classifier {
    fn fit(&mut self, features: &[Vec<f64>], classes: &[u32]) -> Result<(), DetectError>;

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u32>, DetectError>;
}

/// Random-forest implementation backed by smartcore.
pub struct RandomForestModel {
    n_trees: u16,
    seed: u64,
    forest: Option<RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>>,
}

impl RandomForestModel {
    pub fn new() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            forest: None,
        }
    }

    pub fn with_n_trees(mut self, n_trees: u16) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for RandomForestModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for RandomForestModel {
    fn fit(&mut self, features: &[Vec<f64>], classes: &[u32]) -> Result<(), DetectError> {
        let x = DenseMatrix::from_2d_vec(&features.to_vec());
        let y = classes.to_vec();

        let parameters = RandomForestClassifierParameters::default()
            .with_n_trees(self.n_trees)
            .with_seed(self.seed);

        let forest = RandomForestClassifier::fit(&x, &y, parameters)
            .map_err(|e| DetectError::Classifier(e.to_string()))?;

        self.forest = Some(forest);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u32>, DetectError> {
        let forest = self.forest.as_ref().ok_or(DetectError::NotTrained)?;
        let x = DenseMatrix::from_2d_vec(&features.to_vec());

        forest
            .predict(&x)
            .map_err(|e| DetectError::Classifier(e.to_string()))
    }
}

/// Maps label strings to the dense class indices classifiers operate on,
/// and back. Classes are kept sorted so the encoding is stable across
/// runs for the same label set.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit(labels: &[String]) -> Self {
        let mut classes = labels.to_vec();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn encode(&self, label: &str) -> Option<u32> {
        self.classes.iter().position(|c| c == label).map(|i| i as u32)
    }

    pub fn decode(&self, class: u32) -> Option<&str> {
        self.classes.get(class as usize).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encoder_round_trip() {
        let encoder = LabelEncoder::fit(&labels(&["RSA", "AES", "RSA", "ECC", "DES"]));
        assert_eq!(encoder.len(), 4);
        for label in ["AES", "DES", "ECC", "RSA"] {
            let class = encoder.encode(label).unwrap();
            assert_eq!(encoder.decode(class), Some(label));
        }
    }

    #[test]
    fn test_encoder_is_sorted_and_deduped() {
        let encoder = LabelEncoder::fit(&labels(&["DES", "AES", "DES", "AES"]));
        assert_eq!(encoder.classes(), &labels(&["AES", "DES"])[..]);
    }

    #[test]
    fn test_unknown_label_and_class() {
        let encoder = LabelEncoder::fit(&labels(&["AES", "DES"]));
        assert_eq!(encoder.encode("RSA"), None);
        assert_eq!(encoder.decode(5), None);
    }

    #[test]
    fn test_untrained_forest_rejects_predict() {
        let model = RandomForestModel::new();
        let result = model.predict(&[vec![1.0, 2.0, 3.0, 4.0, 5.0]]);
        assert!(matches!(result, Err(crate::error::DetectError::NotTrained)));
    }
}
