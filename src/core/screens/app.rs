//! General app preferences screen: profile, theme, notifications, locale

use std::sync::Arc;

use serde_json::Value;

use crate::core::screens::SettingsScreen;
use crate::core::storage::SettingsStorage;
use crate::core::store::WritePolicy;
use crate::shared::errors::SettingsResult;
use crate::shared::types::AppSettings;

/// Side effect applying a theme to the application shell
pub type ThemeApplier = Box<dyn Fn(&str) + Send + Sync>;

pub struct AppSettingsScreen {
    screen: SettingsScreen<AppSettings>,
    theme_applier: Option<ThemeApplier>,
}

impl AppSettingsScreen {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self::with_policy(storage, WritePolicy::OnChange)
    }

    pub fn with_policy(storage: Arc<dyn SettingsStorage>, policy: WritePolicy) -> Self {
        Self {
            screen: SettingsScreen::with_policy(storage, policy),
            theme_applier: None,
        }
    }

    /// Attach the shell-level side effect invoked when the theme changes
    pub fn with_theme_applier(mut self, applier: ThemeApplier) -> Self {
        self.theme_applier = Some(applier);
        self
    }

    pub fn settings(&self) -> &AppSettings {
        self.screen.settings()
    }

    pub fn set_field(&mut self, path: &str, value: Value) -> SettingsResult<()> {
        self.screen.set_field(path, value)
    }

    pub fn toggle(&mut self, path: &str) -> SettingsResult<()> {
        self.screen.toggle(path)
    }

    /// Flip between dark and light and apply the result to the shell
    ///
    /// Any value other than "dark" flips to "dark", so an out-of-set stored
    /// theme recovers on the first toggle.
    pub fn toggle_theme(&mut self) -> SettingsResult<()> {
        let next = if self.screen.settings().theme == "dark" {
            "light"
        } else {
            "dark"
        };
        self.screen.set_field("theme", Value::String(next.to_string()))?;

        if let Some(applier) = &self.theme_applier {
            applier(next);
        }
        Ok(())
    }

    pub fn toggle_notifications(&mut self) -> SettingsResult<()> {
        self.screen.toggle("notifications")
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
}
