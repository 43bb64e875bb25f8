//! Feed contract and network client.
//!
//! - `types` - Wire types for the `/feed` JSON payload and the UI filter
//! - `fetcher` - The single HTTP call this application makes

mod fetcher;
mod types;

pub use fetcher::{fetch_feed, FetchError, FEED_TIMEOUT};
pub use types::{FeedItem, FeedResponse, Filter, ItemKind, SYNTHESIS_FALLBACK, UNKNOWN_AUTHOR};
