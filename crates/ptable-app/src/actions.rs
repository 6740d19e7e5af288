//! Action handlers: UpdateAction dispatch and background task spawning

use std::process::Command;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::OpenLink { url, browser } => {
            tokio::spawn(async move {
                match open_url_in_browser(&url, &browser) {
                    Ok(()) => info!("Opened {}", url),
                    Err(e) => {
                        error!("Failed to open {}: {e}", url);
                        let _ = msg_tx
                            .send(Message::LinkOpenFailed {
                                url,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }
    }
}

/// Open a URL in the system browser
///
/// If `browser` is non-empty, it is used as the browser command. Otherwise
/// the platform-default opener is used.
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
