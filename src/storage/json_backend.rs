use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::errors::LedgerError;

use super::{records_file, write_document, RecordStore, Result};

/// Schema version stamped into the record document.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RecordDocument {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

fn default_schema_version() -> u32 {
    RECORD_SCHEMA_VERSION
}

impl Default for RecordDocument {
    fn default() -> Self {
        Self {
            schema_version: RECORD_SCHEMA_VERSION,
            records: Vec::new(),
        }
    }
}

/// Whole-document JSON record store.
///
/// The collection is read once at construction and fully rewritten on every
/// append, so the on-disk document is never observed half-written. Records
/// are held newest-first.
pub struct JsonRecordStore {
    path: PathBuf,
    document: RecordDocument,
}

impl JsonRecordStore {
    /// Opens the store at the default application location.
    pub fn new_default() -> Result<Self> {
        Self::open(records_file())
    }

    /// Opens a store backed by `path`, loading any existing document.
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut document = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let document: RecordDocument = serde_json::from_str(&data)?;
            if document.schema_version > RECORD_SCHEMA_VERSION {
                return Err(LedgerError::Storage(format!(
                    "record store `{}` is from a newer schema version",
                    path.display()
                )));
            }
            document
        } else {
            RecordDocument::default()
        };
        // Hand-replaced documents may arrive unsorted; ids are monotonic so
        // they double as recency.
        document.records.sort_by(|a, b| b.id.cmp(&a.id));
        tracing::debug!(
            count = document.records.len(),
            "record store loaded from {}",
            path.display()
        );
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.document)?;
        write_document(&self.path, &json)
    }
}

impl RecordStore for JsonRecordStore {
    fn append(&mut self, record: Record) -> Result<()> {
        tracing::debug!(id = record.id, "appending record");
        self.document.records.insert(0, record);
        self.persist()
    }

    fn list(&self) -> &[Record] {
        &self.document.records
    }

    fn next_id(&self) -> u64 {
        self.document
            .records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |id| id + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{allocate, RateTable};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonRecordStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store =
            JsonRecordStore::open(temp.path().join("records.json")).expect("json record store");
        (store, temp)
    }

    fn sample_record(id: u64) -> Record {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
        let result = allocate(Decimal::from(100), start, &RateTable::default()).expect("allocate");
        Record::new(id, "Mess", Utc::now(), result)
    }

    #[test]
    fn append_and_reload_roundtrip() {
        let (mut store, guard) = store_with_temp_dir();
        store.append(sample_record(1)).expect("append");
        store.append(sample_record(2)).expect("append");

        let reloaded =
            JsonRecordStore::open(guard.path().join("records.json")).expect("reopen store");
        let ids: Vec<u64> = reloaded.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn missing_document_starts_empty() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.list().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn next_id_stays_above_every_stored_id() {
        let (mut store, _guard) = store_with_temp_dir();
        store.append(sample_record(7)).expect("append");
        store.append(sample_record(3)).expect("append");
        assert_eq!(store.next_id(), 8);
    }

    #[test]
    fn newer_schema_documents_are_refused() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("records.json");
        std::fs::write(&path, r#"{"schema_version": 99, "records": []}"#).expect("seed file");
        assert!(JsonRecordStore::open(path).is_err());
    }
}
