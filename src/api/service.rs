use crate::analysis::analyzer::{analyze, content_hash};
use crate::analysis::types::StringRecord;
use crate::error::{AnalyzerError, Result};
use crate::query::filter;
use crate::query::interpreter::interpret;
use crate::query::types::{FilterOutcome, InterpretedQuery, NaturalLanguageOutcome, PredicateSet};
use crate::storage::memory::RecordStore;

use std::sync::Arc;

/// The core string operations over an injected record store.
///
/// Records are always addressed by their value; the content hash is re-derived on
/// every lookup so callers never handle opaque IDs.
pub struct StringService {
    store: Arc<RecordStore>,
}

impl StringService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Analyzes `value` and stores the result.
    ///
    /// # Errors
    /// * `InvalidInput` if `value` is empty or whitespace-only.
    /// * `Conflict` if the same value is already stored.
    pub fn analyze_and_store(&self, value: &str) -> Result<StringRecord> {
        if value.trim().is_empty() {
            tracing::warn!("Rejected empty or whitespace-only value");
            return Err(AnalyzerError::InvalidInput(
                "The 'value' field cannot be empty or whitespace.".to_string(),
            ));
        }

        let record = StringRecord::new(value.to_string(), analyze(value));
        let stored = self.store.insert(record)?;

        tracing::info!(
            "Stored string {} (length={}, palindrome={})",
            stored.content_hash(),
            stored.properties.length,
            stored.properties.is_palindrome
        );
        Ok(stored)
    }

    pub fn fetch(&self, value: &str) -> Result<StringRecord> {
        let hash = content_hash(value);
        tracing::debug!("FETCH: Looking up {}", hash);
        self.store.get(&hash)
    }

    pub fn delete(&self, value: &str) -> Result<()> {
        let removed = self.store.delete(&content_hash(value))?;
        tracing::info!("Deleted string {}", removed.content_hash());
        Ok(())
    }

    /// Runs a structured filter over a snapshot of the store.
    pub fn filter(&self, predicates: PredicateSet) -> Result<FilterOutcome> {
        predicates.validate()?;

        let data = filter::apply(self.store.list_all(), &predicates);
        Ok(FilterOutcome {
            count: data.len(),
            data,
            filters_applied: predicates,
        })
    }

    /// Interprets `query` and runs the resulting filter.
    ///
    /// # Errors
    /// * `UnparseableQuery` if no rule recognized anything in the query.
    pub fn query_natural_language(&self, query: &str) -> Result<NaturalLanguageOutcome> {
        let parsed_filters = interpret(query);

        if parsed_filters.is_empty() {
            tracing::warn!("Natural language query produced no filters: {:?}", query);
            return Err(AnalyzerError::UnparseableQuery(
                "Query parsed but resulted in no recognized filters.".to_string(),
            ));
        }

        let data = filter::apply(self.store.list_all(), &parsed_filters);
        Ok(NaturalLanguageOutcome {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters,
            },
        })
    }
}
