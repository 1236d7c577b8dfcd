//! Main TUI runner - entry points and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use bloom_app::config::Settings;
use bloom_app::message::Message;
use bloom_app::signals;
use bloom_app::state::AppState;
use bloom_app::{process_message, ImageLoader, OfflineImageLoader};
use bloom_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI with the built-in image loader
pub async fn run(settings: Settings) -> Result<()> {
    let loader = OfflineImageLoader::new().with_latency(settings.images.latency());
    run_with_loader(settings, Arc::new(loader)).await
}

/// Run the TUI with a caller-supplied image loader
pub async fn run_with_loader<L>(settings: Settings, loader: Arc<L>) -> Result<()>
where
    L: ImageLoader + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting on {} (theme={:?}, images={})",
        settings.behavior.start_screen, settings.ui.theme, settings.images.enabled
    );

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler, image loads)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::Init, &msg_tx, &loader);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, loader);

    // Restore terminal even when the loop failed
    if let Err(e) = terminal::restore() {
        error!("{}", e);
    }

    info!("Bloom exiting");
    result
}

/// Main event loop
fn run_loop<L>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    loader: Arc<L>,
) -> Result<()>
where
    L: ImageLoader + Sync + 'static,
{
    while !state.should_quit() {
        // Process external messages (signals, finished image loads)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &loader);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &loader);
        }
    }

    Ok(())
}
