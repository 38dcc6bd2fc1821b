use base64::prelude::*;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Labels the generator knows how to fabricate samples for.
pub const ALGORITHMS: [&str; 4] = ["AES", "DES", "RSA", "ECC"];

/// Raw byte length fabricated for a known algorithm label.
fn block_length(algorithm: &str) -> Option<usize> {
    match algorithm {
        "AES" => Some(16),
        "DES" => Some(8),
        "RSA" => Some(128),
        "ECC" => Some(64),
        _ => None,
    }
}

/// Fabricates a synthetic "ciphertext" for the given algorithm label.
///
/// Known labels yield a fixed number of random bytes in standard base64;
/// anything else falls back to 10-100 random alphanumeric characters.
/// Only the length and alphabet statistics are label-dependent, there is
/// no relationship to real encryption output.
pub fn generate_sample<R: Rng>(rng: &mut R, algorithm: &str) -> String {
    match block_length(algorithm) {
        Some(len) => {
            let mut raw = vec![0u8; len];
            rng.fill_bytes(&mut raw);
            BASE64_STANDARD.encode(&raw)
        }
        None => {
            let len = rng.gen_range(10..=100);
            (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
        }
    }
}

/// One-line description of a known algorithm label, for log output.
pub fn algorithm_description(algorithm: &str) -> Option<&'static str> {
    match algorithm {
        "AES" => Some(
            "Advanced Encryption Standard - block cipher with 128/192/256-bit keys, \
             the dominant symmetric algorithm",
        ),
        "DES" => Some(
            "Data Encryption Standard - legacy block cipher with 56-bit keys, \
             vulnerable to brute force",
        ),
        "RSA" => Some(
            "Rivest-Shamir-Adleman - public-key cryptosystem widely used for \
             secure data transmission",
        ),
        "ECC" => Some(
            "Elliptic Curve Cryptography - public-key schemes over elliptic curves \
             with much shorter keys than RSA",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_labels_have_block_lengths() {
        for algorithm in ALGORITHMS {
            assert!(block_length(algorithm).is_some());
        }
        assert!(block_length("Blowfish").is_none());
    }

    #[test]
    fn test_fallback_sample_is_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let sample = generate_sample(&mut rng, "unknown");
            assert!(sample.len() >= 10 && sample.len() <= 100);
            assert!(sample.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_descriptions_cover_known_labels() {
        for algorithm in ALGORITHMS {
            assert!(algorithm_description(algorithm).is_some());
        }
        assert!(algorithm_description("ROT13").is_none());
    }
}
