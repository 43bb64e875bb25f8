//! Responsive article card grid.
//!
//! Cards flow left-to-right, top-to-bottom in the filtered order. The
//! column count adapts to terminal width (1/2/3 columns), and the grid
//! scrolls by whole rows to keep the selected card visible.

use crate::app::App;
use crate::feed::{FeedItem, Filter, ItemKind};
use crate::theme::Palette;
use crate::util::{split_at_width, strip_control_chars, truncate_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::loop_runner::SPINNER_FRAMES;
use super::synthesis::SPINNER;

/// Fixed card height in terminal rows (5 content lines + borders).
const CARD_HEIGHT: u16 = 7;

/// Placeholder cards shown per viewport while loading.
const PLACEHOLDER_COUNT: usize = 6;

/// Column count for a given grid width: 1/2/3 columns as the terminal
/// widens, mirroring the responsive breakpoints of the shipped dashboard.
fn column_count(width: u16) -> usize {
    if width >= 150 {
        3
    } else if width >= 100 {
        2
    } else {
        1
    }
}

/// Render the card grid.
///
/// Takes `&mut App` because the grid geometry (columns, visible rows) is
/// recorded here for the navigation handlers, and scroll is re-clamped so
/// a resize never strands the selection off screen.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 1 || area.height < CARD_HEIGHT {
        return;
    }

    let columns = column_count(area.width);
    let viewport_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.sync_grid_viewport(columns, viewport_rows);

    // Loading replaces the grid with placeholders; stale cards are never
    // shown alongside the loading indicator
    if app.loading {
        render_placeholders(f, app, area, columns, viewport_rows);
        return;
    }

    let items = app.filtered();
    if items.is_empty() {
        render_empty(f, app, area);
        return;
    }

    let total_rows = items.len().div_ceil(columns);
    let start_row = app.grid_scroll_row.min(total_rows.saturating_sub(1));

    for visible_row in 0..viewport_rows {
        let row = start_row + visible_row;
        if row >= total_rows {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y: area.y + (visible_row as u16) * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if let Some(item) = items.get(index) {
                render_card(f, &app.theme, item, index == app.selected_card, *cell);
            }
        }
    }
}

/// Render one card.
fn render_card(f: &mut Frame, theme: &Palette, item: &FeedItem, selected: bool, area: Rect) {
    let border_style = if selected {
        theme.card_border_selected
    } else {
        theme.card_border
    };

    // Badge: binary news/not-news, both in label and style
    let badge_style = match item.kind {
        ItemKind::News => theme.badge_intel,
        _ => theme.badge_research,
    };
    let badge = Line::from(Span::styled(
        format!(" {} ", item.kind.badge_label()),
        badge_style,
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(badge);
    let inner_width = area.width.saturating_sub(2) as usize;

    let title = strip_control_chars(&item.title);
    let summary = strip_control_chars(&item.summary);
    let (summary_head, summary_tail) = split_at_width(summary.as_ref(), inner_width);

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(title.as_ref(), inner_width).into_owned(),
            theme.card_title,
        )),
        Line::from(Span::styled(
            truncate_to_width(&format!("{} · {}", item.source, item.date), inner_width)
                .into_owned(),
            theme.card_meta,
        )),
        Line::from(Span::styled(summary_head.to_string(), theme.card_summary)),
        Line::from(Span::styled(
            truncate_to_width(summary_tail.trim_start(), inner_width).into_owned(),
            theme.card_summary,
        )),
    ];

    // No author element at all when the backend sent none
    if let Some(author) = item.author_line() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(author.as_ref(), inner_width).into_owned(),
            theme.card_author,
        )));
    }

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

/// Render placeholder cards while a fetch is in flight.
fn render_placeholders(f: &mut Frame, app: &App, area: Rect, columns: usize, viewport_rows: usize) {
    let spinner = SPINNER[app.spinner_frame % SPINNER_FRAMES];
    let count = PLACEHOLDER_COUNT.min(columns * viewport_rows).max(1);
    let total_rows = count.div_ceil(columns);

    for row in 0..total_rows {
        let row_area = Rect {
            x: area.x,
            y: area.y + (row as u16) * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        if row_area.y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            if row * columns + col >= count {
                break;
            }
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.placeholder);
            let body = Paragraph::new(Text::from(vec![
                Line::default(),
                Line::from(format!("{} acquiring signal", spinner)),
                Line::from("▒▒▒▒▒▒▒▒▒▒▒▒"),
            ]))
            .style(app.theme.placeholder)
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(body, *cell);
        }
    }
}

/// Render the empty-grid message for the error and no-match cases.
fn render_empty(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.error {
        (
            "SIGNAL LOST\n\nNo articles received. Press r to retry.",
            app.theme.synthesis_error,
        )
    } else if app.articles.is_empty() {
        ("Feed is empty", app.theme.placeholder)
    } else {
        // Articles exist but none match the active filter
        match app.filter {
            Filter::All => ("Feed is empty", app.theme.placeholder),
            filter => {
                return f.render_widget(
                    Paragraph::new(format!("No signals under {}", filter.label()))
                        .style(app.theme.placeholder)
                        .alignment(Alignment::Center),
                    centered_line(area),
                );
            }
        }
    };
    f.render_widget(
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center),
        centered_line(area),
    );
}

/// A vertically-centered band of the grid area for short messages.
fn centered_line(area: Rect) -> Rect {
    let height = 3.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: area.width,
        height,
    }
}
