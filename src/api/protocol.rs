//! String API Protocol
//!
//! Defines the HTTP endpoints and the Data Transfer Objects (DTOs) exchanged with clients.

use crate::error::{AnalyzerError, Result};
use crate::query::types::{Predicate, PredicateSet};

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: create (POST) and structured filtering (GET).
pub const ENDPOINT_STRINGS: &str = "/strings";
/// Single record endpoint, addressed by the original string value.
pub const ENDPOINT_STRING_BY_VALUE: &str = "/strings/:value";
/// Path segment of the free-text filtering endpoint. It shadows `/strings/:value` for
/// the stored value of the same text.
pub const NATURAL_LANGUAGE_SEGMENT: &str = "filter-by-natural-language";
/// Free-text filtering endpoint.
pub const ENDPOINT_NATURAL_LANGUAGE: &str = "/strings/filter-by-natural-language";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Data Transfer Objects ---

/// Body of a create request.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStringRequest {
    pub value: String,
}

/// Query-string parameters of the structured filter endpoint.
///
/// Numeric and boolean parameters are type-checked by the extractor; range and
/// single-character checks happen when converting into a `PredicateSet`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<String>,
}

impl TryFrom<FilterParams> for PredicateSet {
    type Error = AnalyzerError;

    fn try_from(params: FilterParams) -> Result<Self> {
        let mut predicates = PredicateSet {
            is_palindrome: params.is_palindrome,
            min_length: params.min_length,
            max_length: params.max_length,
            word_count: params.word_count,
            contains_character: None,
        };

        if let Some(raw) = params.contains_character {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => predicates.set(Predicate::ContainsCharacter(c)),
                _ => {
                    return Err(AnalyzerError::InvalidFilter(
                        "contains_character must be exactly one character".to_string(),
                    ));
                }
            }
        }

        predicates.validate()?;
        Ok(predicates)
    }
}

/// Query-string parameters of the natural-language endpoint.
///
/// Without `query`, the request addresses the stored value `NATURAL_LANGUAGE_SEGMENT`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// Body returned with every error status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}
