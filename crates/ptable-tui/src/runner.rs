//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::{Duration, Instant};

use ptable_app::config::Settings;
use ptable_app::process::process_message;
use ptable_app::signals;
use ptable_app::{AppState, Message};
use ptable_core::prelude::*;
use ptable_core::ContentBundle;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Shortest tick interval accepted from settings
const MIN_TICK_MS: u64 = 10;

/// Run the card grid until the user quits
pub async fn run(content: Arc<ContentBundle>, settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(MIN_TICK_MS));
    info!(
        "Starting UI: {} languages, tick {}ms",
        content.languages().len(),
        tick_rate.as_millis()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        // Keyboard still works without it
        warn!("{}", e);
    }

    let mut state = AppState::new(content, settings);

    // Unified message channel (signal handler, background actions)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, tick_rate);

    terminal::disable_mouse_capture();
    ratatui::restore();
    info!("UI stopped");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !state.should_quit {
        // Process external messages (signal handler, link launches)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(message) = event::poll(timeout)? {
            process_message(state, message, &msg_tx);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            last_tick = Instant::now();
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            process_message(state, Message::Tick { elapsed_ms }, &msg_tx);
        }
    }

    Ok(())
}
