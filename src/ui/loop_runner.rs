//! Main event loop for the TUI.
//!
//! This module contains the core event loop that multiplexes terminal input,
//! background task events, and the periodic animation tick. It also owns the
//! fetch task lifecycle: spawning, supersession, and panic surfacing.

use crate::app::{App, AppEvent};
use crate::feed::fetch_feed;
use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::events::handle_app_event;
use super::input::handle_input;
use super::render::render;

/// Result of handling a key press event.
pub enum Action {
    /// Continue the event loop and process more events.
    Continue,
    /// Exit the application and restore the terminal.
    Quit,
}

/// Number of frames in the loading spinner animation.
pub(super) const SPINNER_FRAMES: usize = 10;

/// Runs the TUI application event loop.
///
/// The initial fetch fires immediately, so the first rendered state is
/// always the loading state. After that, `tokio::select!` multiplexes:
/// - **Terminal input**: key presses from crossterm's async event stream
/// - **Background tasks**: feed fetch results via the `AppEvent` channel
/// - **Periodic tick**: 250ms timer for spinner animation and status expiry
///
/// # Panic Safety
///
/// Installs a panic hook that restores terminal state before unwinding,
/// ensuring the terminal is not left in raw mode on panic.
pub async fn run(
    app: &mut App,
    event_tx: mpsc::Sender<AppEvent>,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Install panic hook BEFORE setting up terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut event_stream = crossterm::event::EventStream::new();

    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    // Signal handlers for graceful shutdown (Unix only)
    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    // Mount: the first fetch starts before the first frame is drawn
    spawn_fetch(app, &event_tx);

    loop {
        // Only render when state has changed
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        // Clear expired status messages and trigger redraw if cleared
        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        // Drain all pending app events before handling more input so a
        // fetch result is never starved by rapid key presses. Discarded
        // stale responses do not force a redraw.
        while let Ok(event) = event_rx.try_recv() {
            if handle_app_event(app, event) {
                app.needs_redraw = true;
            }
        }

        // Platform-specific signal futures
        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        tokio::select! {
            biased;  // Process in order listed for predictable behavior

            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                break;
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                break;
            }

            // Terminal input events
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    app.needs_redraw = true;
                    match handle_input(app, key.code, key.modifiers, &event_tx) {
                        Ok(Action::Quit) => break,
                        Ok(Action::Continue) => {}
                        Err(e) => app.set_status(format!("Error: {}", e)),
                    }
                }
            }

            // Background task events (blocking recv for when queue was empty)
            Some(event) = event_rx.recv() => {
                if handle_app_event(app, event) {
                    app.needs_redraw = true;
                }
            }

            // Periodic tick for spinner animation
            _ = tick_interval.tick() => {
                handle_tick(app);
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

/// Advance the loading animation while a fetch is in flight.
fn handle_tick(app: &mut App) {
    if app.loading {
        app.spinner_frame = (app.spinner_frame + 1) % SPINNER_FRAMES;
        app.needs_redraw = true;
    }
}

/// Spawn a background feed fetch.
///
/// Any in-flight fetch is superseded: its abort handle is taken and fired,
/// and even if it races past the abort its response carries a stale
/// generation and is discarded on receipt. Whichever fetch was issued last
/// is therefore the only one that can mutate state.
pub(super) fn spawn_fetch(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(handle) = app.fetch_abort.take() {
        handle.abort();
        tracing::debug!("Aborted superseded feed fetch");
    }

    let generation = app.begin_fetch();
    let client = app.http_client.clone();
    let base_url = app.backend_base_url.clone();
    let tx = event_tx.clone();

    tracing::debug!(generation, backend = %base_url, "Spawning feed fetch task");

    let task = tokio::spawn(async move {
        let result = fetch_feed(&client, &base_url)
            .await
            .map_err(|e| e.to_string());
        let event = AppEvent::FeedFetched { generation, result };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send fetch result (receiver dropped)");
        }
    });
    app.fetch_abort = Some(task.abort_handle());

    // Surface fetch task panics instead of hanging in the loading state
    let tx = event_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = task.await {
            if e.is_panic() {
                let error = panic_message(e.into_panic());
                let _ = tx
                    .send(AppEvent::TaskPanicked {
                        task: "feed_fetch",
                        error,
                    })
                    .await;
            }
        }
    });
}

/// Extract a printable message from a panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state.
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
