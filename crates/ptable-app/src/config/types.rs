//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub content: ContentSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Fixed grid column count (0 = pick from terminal width)
    #[serde(default)]
    pub columns: usize,

    /// Oscillate the fact bubbles while they are shown
    #[serde(default = "default_true")]
    pub animate_bubbles: bool,

    /// Event poll timeout driving animation ticks
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Gap in cells between a badge and its tooltip
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: u16,

    /// Include the history paragraph in paradigm tooltips
    #[serde(default = "default_true")]
    pub show_history: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            columns: 0,
            animate_bubbles: true,
            tick_rate_ms: default_tick_rate_ms(),
            tooltip_offset: default_tooltip_offset(),
            show_history: true,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Open language homepages when their name is clicked
    #[serde(default = "default_true")]
    pub open_links: bool,

    /// Browser command; empty = system default
    #[serde(default)]
    pub browser: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            open_links: true,
            browser: String::new(),
        }
    }
}

/// Content source settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentSettings {
    /// Directory of content tables replacing the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_tooltip_offset() -> u16 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.columns, 0);
        assert!(settings.ui.animate_bubbles);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.ui.tooltip_offset, 8);
        assert!(settings.ui.show_history);
        assert!(settings.behavior.open_links);
        assert!(settings.behavior.browser.is_empty());
        assert!(settings.content.path.is_none());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
columns = 2

[content]
path = "/srv/tables"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.columns, 2);
        assert!(settings.ui.animate_bubbles);
        assert_eq!(settings.ui.tooltip_offset, 8);
        assert_eq!(
            settings.content.path.as_deref(),
            Some(std::path::Path::new("/srv/tables"))
        );
    }

    #[test]
    fn test_settings_serialize_roundtrip() {
        let mut settings = Settings::default();
        settings.behavior.browser = "firefox".to_string();
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
