//! Query Data Types
//!
//! The predicate shape shared by structured filtering and the natural-language
//! interpreter, plus the outcome objects returned to callers.

use crate::analysis::types::StringRecord;
use crate::error::{AnalyzerError, Result};

use serde::{Deserialize, Serialize};

/// A single filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    IsPalindrome(bool),
    MinLength(usize),
    MaxLength(usize),
    WordCount(usize),
    ContainsCharacter(char),
}

/// A conjunction of optional predicates.
///
/// Unset fields impose no constraint. Serializing the set yields exactly the
/// predicates that were specified, which is what callers get echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `predicate` added, replacing any earlier value for the same field.
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.set(predicate);
        self
    }

    pub fn set(&mut self, predicate: Predicate) {
        match predicate {
            Predicate::IsPalindrome(flag) => self.is_palindrome = Some(flag),
            Predicate::MinLength(n) => self.min_length = Some(n),
            Predicate::MaxLength(n) => self.max_length = Some(n),
            Predicate::WordCount(n) => self.word_count = Some(n),
            Predicate::ContainsCharacter(c) => self.contains_character = Some(c),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of specified predicates.
    pub fn len(&self) -> usize {
        [
            self.is_palindrome.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.word_count.is_some(),
            self.contains_character.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Rejects numeric predicates below 1.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("min_length", self.min_length),
            ("max_length", self.max_length),
            ("word_count", self.word_count),
        ];
        for (name, value) in bounds {
            if value == Some(0) {
                return Err(AnalyzerError::InvalidFilter(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Result of a structured filter query.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: PredicateSet,
}

/// How a free-text query was understood.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: PredicateSet,
}

/// Result of a natural-language query.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageOutcome {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}
