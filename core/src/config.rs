//! Settings persistence
//!
//! Settings are stored as TOML through `confy`:
//! - **Default location**: the per-user config directory (`wisps/settings.toml`)
//! - **Explicit path**: for hosts that keep plugin settings next to the plugin
//!
//! Loaded settings are always clamped into their valid ranges.

use std::path::{Path, PathBuf};

use wisps_types::WispSettings;

const APP_NAME: &str = "wisps";
const CONFIG_NAME: &str = "settings";

/// Errors that can occur while loading or storing settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not resolve the settings location: {0}")]
    Location(#[source] confy::ConfyError),

    #[error("failed to load settings from {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to store settings to {path:?}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Path of the settings file in the per-user config directory
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Location)
}

/// Load settings from the default location, creating it with defaults if missing
pub fn load_settings() -> Result<WispSettings, ConfigError> {
    load_settings_from(&default_settings_path()?)
}

/// Store settings to the default location
pub fn store_settings(settings: &WispSettings) -> Result<(), ConfigError> {
    store_settings_to(&default_settings_path()?, settings)
}

/// Load settings from a TOML file, creating it with defaults if missing
pub fn load_settings_from(path: &Path) -> Result<WispSettings, ConfigError> {
    let mut settings: WispSettings = confy::load_path(path).map_err(|source| ConfigError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    clamp_logged(&mut settings);
    Ok(settings)
}

/// Store settings to a TOML file
pub fn store_settings_to(path: &Path, settings: &WispSettings) -> Result<(), ConfigError> {
    confy::store_path(path, settings).map_err(|source| ConfigError::Store {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse settings from TOML text
pub fn parse_settings(text: &str) -> Result<WispSettings, ConfigError> {
    let mut settings: WispSettings = toml::from_str(text)?;
    clamp_logged(&mut settings);
    Ok(settings)
}

fn clamp_logged(settings: &mut WispSettings) {
    for option in settings.clamp_ranges() {
        tracing::warn!(option = %option, "Setting out of range, clamped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisps_types::Category;
    use wisps_types::settings::{CHEST_DISTANCE_MAX, MARKER_SIZE_MAX};

    #[test]
    fn test_parse_settings_toml() {
        let toml = r#"
enable = true
draw_map = false
encounter_color = [10, 20, 30, 255]

[markers.altars]
color = [255, 0, 0, 255]
size = 8
label = "Sacrifice"
"#;

        let settings = parse_settings(toml).unwrap();
        assert!(settings.enable);
        assert!(!settings.draw_map);
        assert_eq!(settings.encounter_color, [10, 20, 30, 255]);

        let altars = settings.markers.get(Category::Altars);
        assert_eq!(altars.size, 8);
        assert_eq!(altars.label.as_deref(), Some("Sacrifice"));
    }

    #[test]
    fn test_parse_settings_clamps() {
        let toml = r#"
chest_screen_display_max_distance = 5000

[markers.wells]
size = 1000
"#;

        let settings = parse_settings(toml).unwrap();
        assert_eq!(settings.chest_screen_display_max_distance, CHEST_DISTANCE_MAX);
        assert_eq!(settings.markers.wells.size, MARKER_SIZE_MAX);
    }

    #[test]
    fn test_parse_settings_rejects_bad_types() {
        let result = parse_settings("enable = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = WispSettings::default();
        settings.enable = true;
        settings.ignore_fullscreen_panels = true;
        settings.markers.chests.size = 9;

        store_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.toml");

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, WispSettings::default());
        assert!(path.exists());
    }
}
