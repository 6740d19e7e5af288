//! Startup: settings resolution, content loading and the TUI entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ptable_app::config::{self, Settings};
use ptable_core::prelude::*;
use ptable_core::{ContentBundle, ContentSummary};

/// Command-line choices that override the settings file
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Content directory
    pub content: Option<PathBuf>,
    /// Settings file instead of the default location
    pub config: Option<PathBuf>,
    /// Fixed grid column count
    pub columns: Option<usize>,
    pub no_animation: bool,
}

impl LaunchOptions {
    /// Settings file in effect, if the platform has a config directory
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    /// Load the settings file and apply command-line overrides
    pub fn resolve_settings(&self) -> Settings {
        let mut settings = match self.config_path() {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        };

        if let Some(columns) = self.columns {
            settings.ui.columns = columns;
        }
        if self.no_animation {
            settings.ui.animate_bubbles = false;
        }
        if let Some(dir) = &self.content {
            settings.content.path = Some(dir.clone());
        }
        settings
    }
}

/// Load the content bundle named by `settings`, or the bundled content
pub fn load_content(settings: &Settings) -> Result<ContentBundle> {
    match settings.content.path.as_deref() {
        Some(dir) => {
            info!("Loading content from {}", dir.display());
            ContentBundle::load_dir(dir)
        }
        None => ContentBundle::builtin(),
    }
}

/// Validate content and describe it as pretty JSON
pub fn check(settings: &Settings) -> Result<String> {
    let summary: ContentSummary = load_content(settings)?.summary();
    serde_json::to_string_pretty(&summary)
        .map_err(|e| Error::content_invalid(format!("Failed to encode summary: {e}")))
}

/// Write a default settings file at `path`
pub fn init_config(path: &Path) -> Result<bool> {
    config::init_config_file(path)
}

/// Run the terminal UI
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Logging goes to a file; the TUI owns stdout
    ptable_core::logging::init()?;

    let result = run_ui(options).await;
    match &result {
        Err(e) if e.is_fatal() => error!("Startup failed: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("Paradigms Table exiting");
    result
}

async fn run_ui(options: LaunchOptions) -> Result<()> {
    let settings = options.resolve_settings();
    let content = load_content(&settings)?;
    info!("Loaded {} languages", content.languages().len());

    ptable_tui::run(Arc::new(content), settings).await
}
