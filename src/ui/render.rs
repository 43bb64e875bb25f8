//! View layout and render dispatch.
//!
//! The dashboard is a single page: sticky header, synthesis banner, filter
//! tabs, card grid, status line.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{cards, filterbar, header, status, synthesis};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 18;

/// Main render function.
///
/// Handles terminal size validation, then lays out the fixed rows and
/// delegates each to its widget.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(6), // synthesis banner
            Constraint::Length(1), // filter tabs
            Constraint::Min(0),    // card grid
            Constraint::Length(1), // status bar
        ])
        .split(area);

    header::render(f, app, chunks[0]);
    synthesis::render(f, app, chunks[1]);
    filterbar::render(f, app, chunks[2]);
    cards::render(f, app, chunks[3]);
    status::render(f, app, chunks[4]);
}
