use super::types::StringProperties;

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

/// Computes every property of `value`.
///
/// Total over all strings. Each property is computed independently of the others.
pub fn analyze(value: &str) -> StringProperties {
    let character_frequency_map = character_frequency(value);

    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: word_count(value),
        sha256_hash: content_hash(value),
        character_frequency_map,
    }
}

/// Hex-encoded SHA-256 digest of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Palindrome test over the alphanumeric, lower-cased projection.
///
/// An empty projection is trivially a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<char>>().len()
}

/// Number of maximal non-whitespace runs.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in value.chars() {
        frequencies
            .entry(c)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
    frequencies
}
