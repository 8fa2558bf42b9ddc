use std::path::Path;
use crate::settings::Settings;

/// Load settings from an optional JSON file, falling back to defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(p) => p,
        None => return Settings::default(),
    };

    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Failed to read settings file {}: {}. Using defaults.", path.display(), e);
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => {
            tracing::info!("Settings loaded from {}", path.display());
            settings
        }
        Err(e) => {
            tracing::warn!("Failed to deserialize settings in {}: {}. Using defaults.", path.display(), e);
            Settings::default()
        }
    }
}
