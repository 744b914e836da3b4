//! Durable storage for finished records: one JSON document, loaded once at
//! startup and fully rewritten per append.

pub mod json_backend;

use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::domain::Record;

pub type Result<T> = std::result::Result<T, crate::errors::LedgerError>;

const DEFAULT_DIR_NAME: &str = ".meal_ledger";
const RECORDS_FILE: &str = "records.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.meal_ledger`.
/// The `MEAL_LEDGER_HOME` environment variable overrides the default so
/// tests and scripts can point the ledger at an isolated directory.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MEAL_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the record store document.
pub fn records_file() -> PathBuf {
    app_data_dir().join(RECORDS_FILE)
}

/// Path to the application config file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Writes `contents` to a staging file next to `path` and renames it over
/// the target, so a reader never observes a half-written document. Both the
/// record store and the config file persist through this.
pub(crate) fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let staging = staging_path(path);
    if let Err(err) = fill_staging(&staging, contents) {
        // A failed write must not leave a partial staging file behind.
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    fs::rename(&staging, path)?;
    Ok(())
}

fn fill_staging(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Abstraction over persistence backends capable of storing finished
/// records.
pub trait RecordStore: Send + Sync {
    /// Appends one record and durably rewrites the whole collection.
    fn append(&mut self, record: Record) -> Result<()>;

    /// All stored records, most recent first.
    fn list(&self) -> &[Record];

    /// Next assignable id, strictly above every id already stored.
    fn next_id(&self) -> u64;
}

pub use json_backend::{JsonRecordStore, RECORD_SCHEMA_VERSION};
