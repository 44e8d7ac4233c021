//! Symbiotic City settings engine
//!
//! Persistence and mutation model behind the dashboard's two settings
//! screens: general app preferences and AI assistant preferences. Each
//! screen owns a settings aggregate that is loaded from a namespaced
//! key-value entry on startup, mutated one leaf field at a time, and written
//! back as a full document.

pub mod core;
pub mod shared;

pub use crate::core::ack::{SaveAcknowledgement, SAVED_MESSAGE_DELAY};
pub use crate::core::gate::{ConfirmationGate, DestructiveAction, SimulatedHistoryPurge};
pub use crate::core::mutate::{get_field, set_field, toggle};
pub use crate::core::screens::ai::AiSettingsScreen;
pub use crate::core::screens::app::{AppSettingsScreen, ThemeApplier};
pub use crate::core::screens::SettingsScreen;
pub use crate::core::storage::{MemoryStorage, RedbStorage, SettingsStorage};
pub use crate::core::store::{SettingsStore, WritePolicy};
pub use crate::shared::errors::{SettingsError, SettingsResult};
pub use crate::shared::types::{AiSettings, AppSettings, SettingsAggregate};
