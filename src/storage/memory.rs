use crate::analysis::types::StringRecord;
use crate::error::{AnalyzerError, Result};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// In-memory record store keyed by content hash.
///
/// Holds at most one record per hash. Inserting an existing hash is a conflict, never
/// an overwrite. The duplicate check and the insert happen under the same shard lock,
/// so concurrent inserts of one value cannot both succeed.
pub struct RecordStore {
    records: DashMap<String, StringRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Stores `record` under its content hash and returns a copy of it.
    pub fn insert(&self, record: StringRecord) -> Result<StringRecord> {
        match self.records.entry(record.content_hash().to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!("INSERT: Hash {} already present", record.content_hash());
                Err(AnalyzerError::Conflict)
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    pub fn get(&self, content_hash: &str) -> Result<StringRecord> {
        self.records
            .get(content_hash)
            .map(|entry| entry.value().clone())
            .ok_or(AnalyzerError::NotFound)
    }

    pub fn delete(&self, content_hash: &str) -> Result<StringRecord> {
        self.records
            .remove(content_hash)
            .map(|(_, record)| record)
            .ok_or(AnalyzerError::NotFound)
    }

    /// Snapshot of every stored record, ordered by creation time.
    ///
    /// The returned vector owns its records; later inserts and deletes do not touch it.
    pub fn list_all(&self) -> Vec<StringRecord> {
        let mut records: Vec<StringRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
