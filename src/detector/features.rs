use serde::{Deserialize, Serialize};

use crate::detector::entropy::shannon_entropy;
use crate::error::DetectError;

/// Statistical summary of a ciphertext string, in the fixed order the
/// classifier was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CipherFeatures {
    pub length: f64,
    pub entropy: f64,
    pub digit_count: f64,
    pub letter_count: f64,
    pub punctuation_count: f64,
}

impl CipherFeatures {
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.length,
            self.entropy,
            self.digit_count,
            self.letter_count,
            self.punctuation_count,
        ]
    }

    pub fn feature_names() -> Vec<&'static str> {
        vec![
            "length",
            "entropy",
            "digit_count",
            "letter_count",
            "punctuation_count",
        ]
    }
}

/// Extracts the 5-dimensional feature vector from a ciphertext.
///
/// Counts are taken over the encoded text exactly as received, base64
/// padding and all. The punctuation class is ASCII punctuation, which is
/// disjoint from digits and letters, so the three counts never exceed
/// the total length.
pub fn extract_features(ciphertext: &str) -> Result<CipherFeatures, DetectError> {
    if ciphertext.is_empty() {
        return Err(DetectError::EmptyCiphertext);
    }

    let length = ciphertext.chars().count() as f64;
    let entropy = shannon_entropy(ciphertext);
    let digit_count = ciphertext.chars().filter(|c| c.is_ascii_digit()).count() as f64;
    let letter_count = ciphertext.chars().filter(|c| c.is_alphabetic()).count() as f64;
    let punctuation_count = ciphertext
        .chars()
        .filter(|c| c.is_ascii_punctuation())
        .count() as f64;

    Ok(CipherFeatures {
        length,
        entropy,
        digit_count,
        letter_count,
        punctuation_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_character_features() {
        let features = extract_features("aaaa").unwrap();
        assert_eq!(features.to_vector(), vec![4.0, 0.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_mixed_character_features() {
        let features = extract_features("ab12!").unwrap();
        assert_eq!(features.length, 5.0);
        assert!((features.entropy - 5.0f64.log2()).abs() < 1e-9);
        assert_eq!(features.digit_count, 2.0);
        assert_eq!(features.letter_count, 2.0);
        assert_eq!(features.punctuation_count, 1.0);
    }

    #[test]
    fn test_base64_padding_counts_as_punctuation() {
        let features = extract_features("QQ==").unwrap();
        assert_eq!(features.length, 4.0);
        assert_eq!(features.letter_count, 2.0);
        assert_eq!(features.punctuation_count, 2.0);
    }

    #[test]
    fn test_empty_ciphertext_rejected() {
        let result = extract_features("");
        assert!(matches!(result, Err(DetectError::EmptyCiphertext)));
    }

    #[test]
    fn test_counts_bounded_by_length() {
        for text in ["x", "Zm9vYmFy", "a b\tc", "!!??12ab", "héllo"] {
            let f = extract_features(text).unwrap();
            assert!(f.digit_count + f.letter_count <= f.length);
            assert!(f.digit_count + f.letter_count + f.punctuation_count <= f.length);
        }
    }

    #[test]
    fn test_vector_order_matches_names() {
        let features = extract_features("ab12!").unwrap();
        assert_eq!(
            features.to_vector().len(),
            CipherFeatures::feature_names().len()
        );
    }
}
