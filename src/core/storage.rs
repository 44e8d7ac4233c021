//! Key-value storage port for settings persistence
//!
//! Aggregates are stored as JSON documents under fixed namespace keys. The
//! port is synchronous, single-writer, last-write-wins.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};

use crate::shared::errors::{SettingsError, SettingsResult};

/// Redb table definition for settings documents
/// Key: namespace string, Value: serialized aggregate JSON
const SETTINGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("settings");

/// Storage port the settings stores persist through
pub trait SettingsStorage: Send + Sync {
    /// Read the raw document stored under `key`, if any
    fn get(&self, key: &str) -> SettingsResult<Option<String>>;

    /// Write the raw document under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> SettingsResult<()>;
}

/// In-memory storage (test double and fallback when the database is unavailable)
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStorage for MemoryStorage {
    fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        let entries = self.entries.lock()
            .map_err(|e| SettingsError::Persistence(format!("Mutex poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let mut entries = self.entries.lock()
            .map_err(|e| SettingsError::Persistence(format!("Mutex poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Redb-based storage implementation
pub struct RedbStorage {
    db: Mutex<Database>,
}

impl RedbStorage {
    /// Open (or create) the settings database in the app's data directory
    pub fn new() -> SettingsResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "antigravity", "symbiotic-city")
            .ok_or_else(|| SettingsError::Persistence("Failed to get project directories".to_string()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Self::open_at(&data_dir.join("settings.redb"))
    }

    /// Open (or create) a settings database at an explicit path
    pub fn open_at(path: &Path) -> SettingsResult<Self> {
        let db = Database::create(path)
            .map_err(|e| SettingsError::Persistence(format!("Failed to create database: {}", e)))?;

        // Initialize table
        {
            let write_txn = db.begin_write()
                .map_err(|e| SettingsError::Persistence(format!("Failed to begin write transaction: {}", e)))?;
            {
                let _table = write_txn.open_table(SETTINGS_TABLE)
                    .map_err(|e| SettingsError::Persistence(format!("Failed to open table: {}", e)))?;
            }
            write_txn.commit()
                .map_err(|e| SettingsError::Persistence(format!("Failed to commit transaction: {}", e)))?;
        }

        Ok(Self { db: Mutex::new(db) })
    }
}

impl SettingsStorage for RedbStorage {
    fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        let db = self.db.lock()
            .map_err(|e| SettingsError::Persistence(format!("Mutex poisoned: {}", e)))?;

        let read_txn = db.begin_read()
            .map_err(|e| SettingsError::Persistence(format!("Failed to begin read: {}", e)))?;

        let table = read_txn.open_table(SETTINGS_TABLE)
            .map_err(|e| SettingsError::Persistence(format!("Failed to open table: {}", e)))?;

        let entry = table.get(key)
            .map_err(|e| SettingsError::Persistence(format!("Failed to read key: {}", e)))?;

        Ok(entry.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let db = self.db.lock()
            .map_err(|e| SettingsError::Persistence(format!("Mutex poisoned: {}", e)))?;

        let write_txn = db.begin_write()
            .map_err(|e| SettingsError::Persistence(format!("Failed to begin write: {}", e)))?;

        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)
                .map_err(|e| SettingsError::Persistence(format!("Failed to open table: {}", e)))?;

            table.insert(key, value)
                .map_err(|e| SettingsError::Persistence(format!("Failed to insert: {}", e)))?;
        }

        write_txn.commit()
            .map_err(|e| SettingsError::Persistence(format!("Failed to commit: {}", e)))?;

        Ok(())
    }
}
