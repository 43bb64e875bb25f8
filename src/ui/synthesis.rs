//! Synthesis banner widget.
//!
//! Three mutually exclusive branches, checked in priority order:
//! loading, then error, then the synthesis text itself.

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::loop_runner::SPINNER_FRAMES;

/// Braille spinner frames for the uplink animation. Shared with the card
/// grid's loading placeholders so both regions animate in step.
pub(super) const SPINNER: [char; SPINNER_FRAMES] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Shown while a fetch is in flight.
const LOADING_MESSAGE: &str = "Establishing neural uplink...";

/// Shown when the most recent fetch failed. Names the usual culprit: a
/// backend_base_url that points at nothing.
const ERROR_MESSAGE: &str =
    "Cortex link failure. Verify that backend_base_url points at a running Cortex instance.";

/// Render the synthesis banner from App state. Holds no state of its own.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" DAILY SYNTHESIS ");

    let paragraph = if app.loading {
        let frame = SPINNER[app.spinner_frame % SPINNER_FRAMES];
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", frame), app.theme.synthesis_loading),
            Span::styled(LOADING_MESSAGE, app.theme.synthesis_loading),
        ]))
    } else if app.error {
        Paragraph::new(ERROR_MESSAGE)
            .style(app.theme.synthesis_error)
            .wrap(Wrap { trim: true })
    } else {
        Paragraph::new(app.synthesis.as_str())
            .style(app.theme.synthesis_text)
            .wrap(Wrap { trim: true })
    };

    f.render_widget(paragraph.block(block), area);
}
