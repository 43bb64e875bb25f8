//! Utility functions for common operations.
//!
//! - **URL validation**: sanity-checking the configured backend endpoint
//! - **Text processing**: Unicode-aware width calculation and truncation

mod text;
mod url_validator;

pub use text::{display_width, split_at_width, strip_control_chars, truncate_to_width};
pub use url_validator::{validate_backend_url, BackendUrlError};
