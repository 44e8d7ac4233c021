//! Destructive-action confirmation gate
//!
//! Destructive actions go through an explicit confirmation prompt. The
//! effect behind the prompt is injected, so the simulated history purge can
//! be swapped for a real deletion without touching the gate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::shared::errors::SettingsResult;

/// Effect fired when the user confirms a destructive prompt
#[async_trait]
pub trait DestructiveAction: Send + Sync {
    async fn execute(&self) -> SettingsResult<()>;
}

/// Placeholder purge: logs intent only, removes nothing
///
/// The dashboard has no real history deletion yet; this mirrors that.
pub struct SimulatedHistoryPurge;

#[async_trait]
impl DestructiveAction for SimulatedHistoryPurge {
    async fn execute(&self) -> SettingsResult<()> {
        println!("[AiSettings] Clearing AI history...");
        Ok(())
    }
}

/// Boolean-gated confirmation for a destructive action
pub struct ConfirmationGate {
    action: Arc<dyn DestructiveAction>,
    open: bool,
}

impl ConfirmationGate {
    pub fn new(action: Arc<dyn DestructiveAction>) -> Self {
        Self {
            action,
            open: false,
        }
    }

    /// Open the confirmation prompt
    pub fn request(&mut self) {
        self.open = true;
    }

    /// Close the prompt without firing the effect
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Fire the effect and close the prompt
    ///
    /// Returns `Ok(false)` when no prompt is open; the effect only ever
    /// runs after an explicit `request`.
    pub async fn confirm(&mut self) -> SettingsResult<bool> {
        if !self.open {
            return Ok(false);
        }

        self.open = false;
        self.action.execute().await?;
        Ok(true)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
