//! AI assistant preferences screen: model behavior, privacy, notifications

use std::sync::Arc;

use serde_json::Value;

use crate::core::gate::{ConfirmationGate, DestructiveAction, SimulatedHistoryPurge};
use crate::core::screens::SettingsScreen;
use crate::core::storage::SettingsStorage;
use crate::core::store::WritePolicy;
use crate::shared::errors::SettingsResult;
use crate::shared::types::AiSettings;

pub struct AiSettingsScreen {
    screen: SettingsScreen<AiSettings>,
    clear_history: ConfirmationGate,
}

impl AiSettingsScreen {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self::with_history_purge(storage, Arc::new(SimulatedHistoryPurge))
    }

    /// Use a real purge effect instead of the simulated one
    pub fn with_history_purge(
        storage: Arc<dyn SettingsStorage>,
        purge: Arc<dyn DestructiveAction>,
    ) -> Self {
        Self {
            screen: SettingsScreen::new(storage),
            clear_history: ConfirmationGate::new(purge),
        }
    }

    pub fn with_policy(storage: Arc<dyn SettingsStorage>, policy: WritePolicy) -> Self {
        Self {
            screen: SettingsScreen::with_policy(storage, policy),
            clear_history: ConfirmationGate::new(Arc::new(SimulatedHistoryPurge)),
        }
    }

    pub fn settings(&self) -> &AiSettings {
        self.screen.settings()
    }

    pub fn set_field(&mut self, path: &str, value: Value) -> SettingsResult<()> {
        self.screen.set_field(path, value)
    }

    pub fn toggle(&mut self, path: &str) -> SettingsResult<()> {
        self.screen.toggle(path)
    }

    pub fn save(&mut self) -> SettingsResult<()> {
        self.screen.save()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.screen.has_unsaved_changes()
    }

    pub fn is_save_acknowledged(&self) -> bool {
        self.screen.is_save_acknowledged()
    }

    /// Open the clear-history confirmation prompt
    pub fn request_clear_history(&mut self) {
        self.clear_history.request();
    }

    /// Dismiss the prompt without clearing anything
    pub fn cancel_clear_history(&mut self) {
        self.clear_history.cancel();
    }

    /// Fire the purge if the prompt is open; settings are never touched
    pub async fn confirm_clear_history(&mut self) -> SettingsResult<bool> {
        self.clear_history.confirm().await
    }

    pub fn is_clear_history_prompt_open(&self) -> bool {
        self.clear_history.is_open()
    }
}
