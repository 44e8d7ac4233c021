//! Settings store
//!
//! Bridges an in-memory settings aggregate and the key-value storage port.
//! Each aggregate lives under its fixed namespace key and the full document
//! is rewritten on every change.

use std::sync::Arc;

use serde_json::Value;

use crate::core::mutate;
use crate::core::storage::SettingsStorage;
use crate::shared::errors::{SettingsError, SettingsResult};
use crate::shared::types::SettingsAggregate;

/// When the durable write happens
///
/// `OnChange` matches the dashboard's shipped behavior: every mutation is
/// written through immediately and the Save button only drives the saved
/// confirmation and the dirty flag. `OnCommit` defers the write to the
/// explicit save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    OnChange,
    OnCommit,
}

/// In-memory settings state bound to a namespace key in a storage port
pub struct SettingsStore<T: SettingsAggregate> {
    storage: Arc<dyn SettingsStorage>,
    value: T,
    dirty: bool,
    policy: WritePolicy,
}

impl<T: SettingsAggregate> SettingsStore<T> {
    /// Load the aggregate stored under `T::NAMESPACE`
    ///
    /// A missing entry yields the defaults. A present but unreadable entry
    /// is logged as corrupt and also yields the defaults; the load path
    /// never fails.
    pub fn load(storage: Arc<dyn SettingsStorage>) -> Self {
        Self::load_with_policy(storage, WritePolicy::OnChange)
    }

    pub fn load_with_policy(storage: Arc<dyn SettingsStorage>, policy: WritePolicy) -> Self {
        let value = match storage.get(T::NAMESPACE) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    let err = SettingsError::CorruptSettings {
                        namespace: T::NAMESPACE.to_string(),
                        detail: e.to_string(),
                    };
                    eprintln!("[SettingsStore] {}, falling back to defaults", err);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                eprintln!(
                    "[SettingsStore] Failed to read '{}': {}, falling back to defaults",
                    T::NAMESPACE,
                    e
                );
                T::default()
            }
        };

        Self {
            storage,
            value,
            dirty: false,
            policy,
        }
    }

    /// Current in-memory aggregate
    pub fn value(&self) -> &T {
        &self.value
    }

    /// True when the aggregate changed since the last explicit save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the leaf at `path` and adopt the resulting aggregate
    pub fn set_field(&mut self, path: &str, value: Value) -> SettingsResult<()> {
        let next = mutate::set_field(&self.value, path, value)?;
        self.replace(next)
    }

    /// Negate the boolean leaf at `path`
    pub fn toggle(&mut self, path: &str) -> SettingsResult<()> {
        let next = mutate::toggle(&self.value, path)?;
        self.replace(next)
    }

    /// Adopt a fully formed aggregate as the new value
    ///
    /// The in-memory value is kept even when the durable write fails, so a
    /// retry persists exactly the state the caller sees.
    pub fn replace(&mut self, next: T) -> SettingsResult<()> {
        self.value = next;
        self.dirty = true;
        if self.policy == WritePolicy::OnChange {
            self.persist()?;
        }
        Ok(())
    }

    /// Explicit save: clears the dirty flag
    ///
    /// Under `OnCommit` this is also the moment the durable write happens;
    /// a failed write leaves the flag set.
    pub fn commit(&mut self) -> SettingsResult<()> {
        if self.policy == WritePolicy::OnCommit {
            self.persist()?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Serialize the full aggregate and write it under the namespace key
    pub fn persist(&self) -> SettingsResult<()> {
        let raw = serde_json::to_string(&self.value)
            .map_err(|e| SettingsError::Persistence(format!("Serialization error: {}", e)))?;
        self.storage.set(T::NAMESPACE, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use crate::shared::types::{AiSettings, AppSettings};
    use serde_json::json;

    /// Backend whose writes always fail; reads behave as empty
    struct FailingStorage;

    impl SettingsStorage for FailingStorage {
        fn get(&self, _key: &str) -> SettingsResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> SettingsResult<()> {
            Err(SettingsError::Persistence("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_fresh_load_uses_defaults() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        let store: SettingsStore<AiSettings> = SettingsStore::load(storage);

        assert_eq!(store.value(), &AiSettings::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_fresh_aggregate_round_trips() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        let store: SettingsStore<AppSettings> = SettingsStore::load(Arc::clone(&storage));
        store.persist().unwrap();

        let reloaded: SettingsStore<AppSettings> = SettingsStore::load(storage);
        assert_eq!(reloaded.value(), &AppSettings::default());
    }

    #[test]
    fn test_mutation_persists_and_round_trips() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());

        let mut store: SettingsStore<AppSettings> = SettingsStore::load(Arc::clone(&storage));
        store.set_field("preferences.timezone", json!("UTC")).unwrap();

        // A fresh store over the same backend reconstructs the same aggregate
        let reloaded: SettingsStore<AppSettings> = SettingsStore::load(storage);
        assert_eq!(reloaded.value(), store.value());
        assert_eq!(reloaded.value().preferences.timezone, "UTC");
        assert_eq!(reloaded.value().preferences.date_format, "DD/MM/YYYY");
    }

    #[test]
    fn test_corrupt_document_falls_back_to_defaults() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        storage.set(AppSettings::NAMESPACE, "{not valid json").unwrap();

        let store: SettingsStore<AppSettings> = SettingsStore::load(storage);
        assert_eq!(store.value(), &AppSettings::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_wrong_shape_falls_back_to_defaults() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        storage.set(AiSettings::NAMESPACE, "{\"general\":42}").unwrap();

        let store: SettingsStore<AiSettings> = SettingsStore::load(storage);
        assert_eq!(store.value(), &AiSettings::default());
    }

    #[test]
    fn test_out_of_set_value_is_preserved() {
        // No enum validation at the storage boundary: unexpected strings
        // load and persist as-is
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        let mut doc = serde_json::to_value(AppSettings::default()).unwrap();
        doc["theme"] = json!("neon");
        storage.set(AppSettings::NAMESPACE, &doc.to_string()).unwrap();

        let store: SettingsStore<AppSettings> = SettingsStore::load(storage);
        assert_eq!(store.value().theme, "neon");
    }

    #[test]
    fn test_dirty_flag_lifecycle() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        let mut store: SettingsStore<AiSettings> = SettingsStore::load(storage);

        assert!(!store.is_dirty());

        store.toggle("privacy.safeMode").unwrap();
        assert!(store.is_dirty());

        store.commit().unwrap();
        assert!(!store.is_dirty());

        store.toggle("privacy.safeMode").unwrap();
        assert!(store.is_dirty());
    }

    #[test]
    fn test_on_commit_policy_defers_write() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());
        let mut store: SettingsStore<AiSettings> =
            SettingsStore::load_with_policy(Arc::clone(&storage), WritePolicy::OnCommit);

        store.toggle("privacy.dataLogging").unwrap();
        assert!(store.is_dirty());
        // Nothing written yet
        assert_eq!(storage.get(AiSettings::NAMESPACE).unwrap(), None);

        store.commit().unwrap();
        assert!(!store.is_dirty());
        let raw = storage.get(AiSettings::NAMESPACE).unwrap().unwrap();
        let persisted: AiSettings = serde_json::from_str(&raw).unwrap();
        assert!(persisted.privacy.data_logging);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store: SettingsStore<AiSettings> = SettingsStore::load(Arc::new(FailingStorage));

        let result = store.toggle("privacy.safeMode");
        assert!(matches!(result, Err(SettingsError::Persistence(_))));

        // The mutation itself is not lost
        assert!(!store.value().privacy.safe_mode);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let storage: Arc<dyn SettingsStorage> = Arc::new(MemoryStorage::new());

        let mut app: SettingsStore<AppSettings> = SettingsStore::load(Arc::clone(&storage));
        let mut ai: SettingsStore<AiSettings> = SettingsStore::load(Arc::clone(&storage));

        app.set_field("theme", json!("light")).unwrap();
        ai.toggle("general.aiAssistantEnabled").unwrap();

        let app_reloaded: SettingsStore<AppSettings> = SettingsStore::load(Arc::clone(&storage));
        let ai_reloaded: SettingsStore<AiSettings> = SettingsStore::load(storage);

        assert_eq!(app_reloaded.value().theme, "light");
        assert!(!ai_reloaded.value().general.ai_assistant_enabled);
        assert_eq!(app_reloaded.value().profile.username, "Digital Citizen");
    }
}
