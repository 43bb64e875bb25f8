use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static hint line
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.loading {
        Cow::Borrowed("Syncing with Cortex...")
    } else {
        Cow::Borrowed(
            "[r]efresh [1/2/3]filter [Tab]cycle [hjkl/arrows]select [o]pen [t]heme [q]uit",
        )
    };

    let paragraph = Paragraph::new(text).style(app.theme.status_bar);
    f.render_widget(paragraph, area);
}
