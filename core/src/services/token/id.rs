//! Random token identifier generation

use rand::Rng;

/// Length of generated identifiers when the caller supplies no `jti`
pub const DEFAULT_JTI_LENGTH: usize = 10;

/// Generates a random alphanumeric identifier of exactly `length` characters.
///
/// The identifier is a lookup key, not a credential; a uniformly distributed
/// thread-local generator is sufficient. A zero length yields the empty
/// string.
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_length() {
        let id = generate_id(10);

        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length_yields_empty_string() {
        assert_eq!(generate_id(0), "");
    }

    #[test]
    fn test_covers_full_alphabet() {
        // A long sample should hit digits, lowercase, and uppercase.
        let sample = generate_id(2048);

        assert!(sample.chars().any(|c| c.is_ascii_digit()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_successive_identifiers_differ() {
        let first = generate_id(32);
        let second = generate_id(32);

        assert_ne!(first, second);
    }
}
