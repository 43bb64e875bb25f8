//! NeuroSync: a terminal dashboard for the Cortex BCI intelligence feed.
//!
//! The application makes a single HTTP call (`GET {backend}/feed`),
//! renders the returned synthesis briefing and article cards, and lets
//! the user filter, navigate, and open articles from the keyboard.

pub mod app;
pub mod config;
pub mod feed;
pub mod theme;
pub mod ui;
pub mod util;
