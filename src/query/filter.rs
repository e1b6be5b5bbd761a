use super::types::PredicateSet;
use crate::analysis::types::StringRecord;

/// Narrows `records` to those satisfying every specified predicate.
///
/// Predicates are applied one after another in a fixed order. An empty set keeps
/// every record.
pub fn apply(mut records: Vec<StringRecord>, predicates: &PredicateSet) -> Vec<StringRecord> {
    if let Some(flag) = predicates.is_palindrome {
        records.retain(|r| r.properties.is_palindrome == flag);
    }

    if let Some(min) = predicates.min_length {
        records.retain(|r| r.properties.length >= min);
    }

    if let Some(max) = predicates.max_length {
        records.retain(|r| r.properties.length <= max);
    }

    if let Some(count) = predicates.word_count {
        records.retain(|r| r.properties.word_count == count);
    }

    if let Some(c) = predicates.contains_character {
        // Case-insensitive check on the original value
        let needle: String = c.to_lowercase().collect();
        records.retain(|r| r.value.to_lowercase().contains(&needle));
    }

    tracing::debug!(
        "Filter applied {} predicate(s), {} record(s) matched",
        predicates.len(),
        records.len()
    );

    records
}
