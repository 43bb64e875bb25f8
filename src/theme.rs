//! Theme system for the TUI.
//!
//! Semantic style roles mapped to ratatui `Style` values. `ThemeVariant`
//! selects between Dark and Light palettes; the active `Palette` is held on
//! the App and swappable at runtime.

use ratatui::style::{Color, Modifier, Style};

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `Palette` for this variant.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Light => Palette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// A complete palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct Palette {
    // -- Header --
    pub header_brand: Style,
    pub header_online: Style,
    pub header_hint: Style,

    // -- Synthesis panel --
    pub synthesis_text: Style,
    pub synthesis_loading: Style,
    pub synthesis_error: Style,

    // -- Filter bar --
    pub filter_active: Style,
    pub filter_inactive: Style,

    // -- Card grid --
    pub card_border: Style,
    pub card_border_selected: Style,
    pub card_title: Style,
    pub card_meta: Style,
    pub card_summary: Style,
    pub card_author: Style,
    pub badge_intel: Style,
    pub badge_research: Style,
    pub placeholder: Style,

    // -- Status bar --
    pub status_bar: Style,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            header_brand: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_online: Style::default().fg(Color::Green),
            header_hint: Style::default().fg(Color::DarkGray),

            synthesis_text: Style::default().fg(Color::White),
            synthesis_loading: Style::default().fg(Color::Cyan),
            synthesis_error: Style::default().fg(Color::Red),

            filter_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            filter_inactive: Style::default().fg(Color::Gray),

            card_border: Style::default().fg(Color::DarkGray),
            card_border_selected: Style::default().fg(Color::Cyan),
            card_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::DarkGray),
            card_summary: Style::default().fg(Color::Gray),
            card_author: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            badge_intel: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            badge_research: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    pub fn light() -> Self {
        Self {
            header_brand: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_online: Style::default().fg(Color::Green),
            header_hint: Style::default().fg(Color::Gray),

            synthesis_text: Style::default().fg(Color::Black),
            synthesis_loading: Style::default().fg(Color::Blue),
            synthesis_error: Style::default().fg(Color::Red),

            filter_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            filter_inactive: Style::default().fg(Color::DarkGray),

            card_border: Style::default().fg(Color::Gray),
            card_border_selected: Style::default().fg(Color::Blue),
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::Gray),
            card_summary: Style::default().fg(Color::DarkGray),
            card_author: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            badge_intel: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(180, 120, 0))
                .add_modifier(Modifier::BOLD),
            badge_research: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(110, 50, 160))
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::Gray),

            status_bar: Style::default().bg(Color::Gray).fg(Color::Black),
        }
    }
}
