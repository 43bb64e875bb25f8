//! Branding bar widget.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header: brand on the left, link indicator on the right.
///
/// The "CORTEX ONLINE" indicator is static decoration — it does not
/// reflect actual connectivity. The shipped dashboard did the same.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled("◆ NEUROSYNC ", app.theme.header_brand),
        Span::styled("// BCI intelligence feed", app.theme.header_hint),
    ]));
    f.render_widget(brand, chunks[0]);

    let indicator = Paragraph::new(Line::from(vec![
        Span::styled("● CORTEX ONLINE", app.theme.header_online),
        Span::styled("  [r] sync", app.theme.header_hint),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(indicator, chunks[1]);
}
