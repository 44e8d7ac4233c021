//! The two settings screens
//!
//! Both screens are the same pattern over different aggregate shapes: a
//! store bound to a namespace key plus the transient save acknowledgement.
//! `app` and `ai` add the screen-specific collaborators (theme application,
//! clear-history gate).

pub mod ai;
pub mod app;

use std::sync::Arc;

use serde_json::Value;

use crate::core::ack::SaveAcknowledgement;
use crate::core::storage::SettingsStorage;
use crate::core::store::{SettingsStore, WritePolicy};
use crate::shared::errors::SettingsResult;
use crate::shared::types::SettingsAggregate;

/// Store + acknowledgement composition shared by both screens
pub struct SettingsScreen<T: SettingsAggregate> {
    store: SettingsStore<T>,
    ack: SaveAcknowledgement,
}

impl<T: SettingsAggregate> SettingsScreen<T> {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self::with_policy(storage, WritePolicy::OnChange)
    }

    pub fn with_policy(storage: Arc<dyn SettingsStorage>, policy: WritePolicy) -> Self {
        Self {
            store: SettingsStore::load_with_policy(storage, policy),
            ack: SaveAcknowledgement::new(),
        }
    }

    /// Current settings aggregate
    pub fn settings(&self) -> &T {
        self.store.value()
    }

    /// Replace one leaf field, addressed by its serialized path
    pub fn set_field(&mut self, path: &str, value: Value) -> SettingsResult<()> {
        self.store.set_field(path, value)
    }

    /// Negate one boolean leaf field
    pub fn toggle(&mut self, path: &str) -> SettingsResult<()> {
        self.store.toggle(path)
    }

    /// Explicit save: commits the store, clears the dirty flag, and shows
    /// the saved confirmation for its full window
    pub fn save(&mut self) -> SettingsResult<()> {
        self.store.commit()?;
        self.ack.trigger();
        Ok(())
    }

    /// True when a field changed since the last explicit save
    pub fn has_unsaved_changes(&self) -> bool {
        self.store.is_dirty()
    }

    /// True while the saved confirmation is showing
    pub fn is_save_acknowledged(&self) -> bool {
        self.ack.is_visible()
    }
}
