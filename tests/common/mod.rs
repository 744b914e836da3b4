use std::path::PathBuf;
use std::sync::Mutex;

use meal_ledger::{config::ConfigManager, storage::JsonRecordStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated record store and config manager for each test, along
/// with the directory they live in.
pub fn setup_test_env() -> (JsonRecordStore, ConfigManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let records = JsonRecordStore::open(base.join("records.json")).expect("open record store");
    let config = ConfigManager::at_path(base.join("config.json")).expect("create config manager");

    (records, config, base)
}
