use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Key-value namespace for the general app settings aggregate
pub const APP_SETTINGS_KEY: &str = "symbiotic-city-settings";

/// Key-value namespace for the AI assistant settings aggregate
pub const AI_SETTINGS_KEY: &str = "symbiotic-city-ai-settings";

/// A settings aggregate that can be persisted under a fixed namespace key
///
/// Both settings screens are instances of the same pattern; this trait is
/// what lets the store, mutators, and screen plumbing stay generic over the
/// two shapes.
pub trait SettingsAggregate:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Fixed key the aggregate is stored under, stable across sessions
    const NAMESPACE: &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AppSettings {
    pub profile: ProfileSettings,
    pub theme: String,
    pub notifications: bool,
    pub preferences: AppPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct ProfileSettings {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AppPreferences {
    pub language: String,
    pub dashboard_layout: String,
    pub timezone: String,
    pub date_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            profile: ProfileSettings {
                username: "Digital Citizen".to_string(),
                email: "citizen@new-singapore-2070.gov.sg".to_string(),
            },
            theme: "dark".to_string(),
            notifications: true,
            preferences: AppPreferences {
                language: "English".to_string(),
                dashboard_layout: "Grid".to_string(),
                timezone: "Asia/Singapore".to_string(),
                date_format: "DD/MM/YYYY".to_string(),
            },
        }
    }
}

impl SettingsAggregate for AppSettings {
    const NAMESPACE: &'static str = APP_SETTINGS_KEY;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AiSettings {
    pub general: AiGeneralSettings,
    pub model: AiModelSettings,
    pub privacy: AiPrivacySettings,
    pub notifications: AiNotificationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AiGeneralSettings {
    pub ai_assistant_enabled: bool,
    pub personality: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AiModelSettings {
    pub model_type: String,
    pub response_length: String,
    pub speed_vs_accuracy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AiPrivacySettings {
    pub data_logging: bool,
    pub safe_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/settings.ts")]
pub struct AiNotificationSettings {
    pub ai_alerts: bool,
    pub in_app_notifications: bool,
    pub email_notifications: bool,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            general: AiGeneralSettings {
                ai_assistant_enabled: true,
                personality: "Friendly".to_string(),
                language: "English".to_string(),
            },
            model: AiModelSettings {
                model_type: "Standard".to_string(),
                response_length: "Medium".to_string(),
                speed_vs_accuracy: "Balanced".to_string(),
            },
            privacy: AiPrivacySettings {
                data_logging: false,
                safe_mode: true,
            },
            notifications: AiNotificationSettings {
                ai_alerts: true,
                in_app_notifications: true,
                email_notifications: false,
            },
        }
    }
}

impl SettingsAggregate for AiSettings {
    const NAMESPACE: &'static str = AI_SETTINGS_KEY;
}

// Select options offered by the settings screens. Advisory only: values
// arriving from storage are accepted and preserved as-is even when out of
// set.
pub const THEMES: &[&str] = &["dark", "light"];
pub const LANGUAGES: &[&str] = &["English", "中文", "Bahasa Melayu", "Tamil"];
pub const DASHBOARD_LAYOUTS: &[&str] = &["Grid", "List", "Compact", "Expanded"];
pub const TIMEZONES: &[&str] = &[
    "Asia/Singapore",
    "UTC",
    "America/New_York",
    "Europe/London",
    "Asia/Tokyo",
];
pub const DATE_FORMATS: &[&str] = &["DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD", "DD-MM-YYYY"];
pub const AI_PERSONALITIES: &[&str] = &["Friendly", "Formal", "Technical"];
pub const AI_MODEL_TYPES: &[&str] = &["Standard", "Advanced", "Experimental"];
pub const AI_RESPONSE_LENGTHS: &[&str] = &["Short", "Medium", "Long"];
pub const AI_SPEED_ACCURACY_MODES: &[&str] = &["Fast", "Balanced", "Accurate"];
