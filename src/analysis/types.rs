//! Analysis Data Types
//!
//! The property set produced by the analyzer and the record shape kept by the store
//! and returned over the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Properties derived from a single string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values).
    pub length: usize,
    /// Whether the alphanumeric, lower-cased projection reads the same reversed.
    pub is_palindrome: bool,
    /// Number of distinct characters, case-sensitive.
    pub unique_characters: usize,
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Hex-encoded SHA-256 digest of the value.
    pub sha256_hash: String,
    /// Occurrences of each distinct character.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored analysis result.
///
/// Immutable once created. The `id` is the content hash of `value`, so there is at most
/// one record per distinct value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Builds a record from an analysis, stamping the creation time.
    pub fn new(value: String, properties: StringProperties) -> Self {
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }

    pub fn content_hash(&self) -> &str {
        &self.id
    }
}
