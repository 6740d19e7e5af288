//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/paradigms-table/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `PTABLE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PTABLE_LOG=debug cargo run
/// PTABLE_LOG=ptable_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ptable.log");

    // Default to info, allow override via PTABLE_LOG
    let env_filter = EnvFilter::try_from_env("PTABLE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("paradigms_table=info,ptable_app=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Paradigms Table starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("paradigms-table").join("logs"))
}

/// Get the log file path for the current day
///
/// Daily rotation suffixes the file name with the local date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    let date = chrono::Local::now().format("%Y-%m-%d");
    Ok(dir.join(format!("ptable.log.{date}")))
}
