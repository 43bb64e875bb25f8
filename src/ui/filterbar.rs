//! Category filter tabs widget.
//!
//! Stateless: renders the three fixed filter options and highlights the
//! active one. Selection is handled by the input layer, which calls back
//! into `App::set_filter`.

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Tabs,
    Frame,
};

use crate::feed::Filter;

/// Render the filter bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let titles: Vec<Line> = Filter::OPTIONS
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!(" {} {} ", i + 1, filter.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.filter.index())
        .style(app.theme.filter_inactive)
        .highlight_style(app.theme.filter_active)
        .divider("│");

    f.render_widget(tabs, area);
}
