//! Settings file loading

use std::path::{Path, PathBuf};

use ptable_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR_NAME: &str = "paradigms-table";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the settings file
///
/// `None` when the platform has no configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default settings file, unless one already exists
///
/// Returns `true` when a new file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default settings to {:?}", config_path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# Paradigms Table Configuration

[ui]
columns = 0               # 0 = pick from terminal width
animate_bubbles = true    # Oscillate fact bubbles
tick_rate_ms = 50
tooltip_offset = 8        # Cells between badge and tooltip
show_history = true       # Show paradigm history in tooltips

[behavior]
open_links = true         # Clicking a language name opens its homepage
browser = ""              # Empty = system default

[content]
# Directory with languages.toml, paradigms.toml, snippets.toml,
# attributes.toml and facts.toml replacing the built-in tables
# path = "/path/to/content"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
columns = 3
animate_bubbles = false

[behavior]
open_links = false
browser = "firefox"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.columns, 3);
        assert!(!settings.ui.animate_bubbles);
        assert!(!settings.behavior.open_links);
        assert_eq!(settings.behavior.browser, "firefox");
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("default config should parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ncolumns = 1\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path).ui.columns, 1);
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("paradigms-table/config.toml"));
        }
    }
}
