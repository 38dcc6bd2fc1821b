//! Synthetic-ciphertext classification demo: fabricates label-dependent
//! random samples, extracts simple character statistics, and trains a
//! random forest to guess the algorithm label back. The learned model
//! only reflects the generator's length and alphabet choices, not real
//! cryptographic structure.

pub mod detector;
pub mod error;

pub use detector::{Dataset, DatasetBuilder, Detector, RandomForestModel};
pub use error::DetectError;
