//! Terminal User Interface module.
//!
//! This module provides the TUI for the dashboard, including:
//! - Main event loop (`run`)
//! - Keyboard input handling
//! - Rendering for the header, synthesis panel, filter bar, and card grid
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop, terminal management, fetch spawning
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - View layout and dispatch
//! - `header` - Branding bar widget
//! - `synthesis` - Synthesis banner widget
//! - `filterbar` - Category filter tabs widget
//! - `cards` - Responsive article card grid widget
//! - `status` - Status bar widget

mod cards;
mod events;
mod filterbar;
mod header;
mod input;
mod loop_runner;
mod render;
mod status;
mod synthesis;

// Re-export the public API
pub use loop_runner::{run, Action};
