//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test triggers ts-rs to export TypeScript bindings
        // The bindings are written to bindings/settings.ts

        AppSettings::export().expect("Failed to export AppSettings");
        ProfileSettings::export().expect("Failed to export ProfileSettings");
        AppPreferences::export().expect("Failed to export AppPreferences");

        AiSettings::export().expect("Failed to export AiSettings");
        AiGeneralSettings::export().expect("Failed to export AiGeneralSettings");
        AiModelSettings::export().expect("Failed to export AiModelSettings");
        AiPrivacySettings::export().expect("Failed to export AiPrivacySettings");
        AiNotificationSettings::export().expect("Failed to export AiNotificationSettings");

        println!("✅ TypeScript bindings exported successfully!");
    }
}
