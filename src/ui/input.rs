//! Keyboard input handling.

use crate::app::{App, AppEvent};
use crate::feed::Filter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::loop_runner::{spawn_fetch, Action};

/// Handle a single key press.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Action::Quit);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Action::Quit),

        // Refresh: each press starts a fresh fetch cycle, superseding any
        // fetch still in flight
        KeyCode::Char('r') => {
            spawn_fetch(app, event_tx);
        }

        // Category filter
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Paper);
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::News);
        }
        KeyCode::Tab => {
            app.set_filter(app.filter.next());
        }

        // Grid navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_down(),
        KeyCode::Char('k') | KeyCode::Up => app.select_up(),
        KeyCode::Char('h') | KeyCode::Left => app.select_prev(),
        KeyCode::Char('l') | KeyCode::Right => app.select_next(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Open the selected card in the system browser
        KeyCode::Char('o') | KeyCode::Enter => {
            if !app.loading {
                open_selected(app);
            }
        }

        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }

        _ => {}
    }

    Ok(Action::Continue)
}

/// Launch the selected card's URL in the default browser.
///
/// Uses a detached process so the browser holds no handle back to the
/// dashboard, the terminal equivalent of opening a link in a separate,
/// no-opener browsing context.
fn open_selected(app: &mut App) {
    let Some(item) = app.selected_item() else {
        return;
    };
    match open::that_detached(&item.url) {
        Ok(()) => {
            tracing::debug!(url = %item.url, id = %item.id, "Opened article in browser");
            app.set_status("Opened in browser");
        }
        Err(e) => {
            tracing::warn!(url = %item.url, error = %e, "Failed to open browser");
            app.set_status(format!("Failed to open browser: {}", e));
        }
    }
}
