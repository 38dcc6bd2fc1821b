use thiserror::Error;

/// Unified error type for the detection pipeline.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Feature extraction requires at least one character.
    #[error("ciphertext is empty")]
    EmptyCiphertext,

    /// A classifier needs at least two classes to learn anything.
    #[error("dataset contains {classes} distinct label(s), training needs at least 2")]
    DegenerateDataset { classes: usize },

    /// Inference was requested before a model was trained.
    #[error("model has not been trained yet")]
    NotTrained,

    /// Failure surfaced by the underlying classifier.
    #[error("classifier error: {0}")]
    Classifier(String),
}
