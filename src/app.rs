use crate::feed::{FeedItem, FeedResponse, Filter, SYNTHESIS_FALLBACK};
use crate::theme::{Palette, ThemeVariant};
use anyhow::Result;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Events from background tasks.
pub enum AppEvent {
    /// A feed fetch finished.
    ///
    /// Fields:
    /// - `generation`: The fetch generation when this request was spawned.
    ///   Responses from superseded fetches are discarded on receipt.
    /// - `result`: The decoded payload, or the error rendered as a string
    ///   for transport across the channel.
    FeedFetched {
        generation: u64,
        result: Result<FeedResponse, String>,
    },
    /// A background task panicked.
    ///
    /// Fields:
    /// - `task`: Name of the task that panicked (e.g., "feed_fetch")
    /// - `error`: The panic message extracted from the panic payload
    TaskPanicked { task: &'static str, error: String },
}

/// Central application state.
///
/// Single owner of everything the UI renders. All mutation happens on the
/// event-loop thread through the transition methods below: `begin_fetch`,
/// `on_feed_fetched` (success/failure), and `set_filter`.
pub struct App {
    pub http_client: reqwest::Client,
    /// Base URL for all feed requests. Fixed for the process lifetime.
    pub backend_base_url: String,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: Palette,

    // Feed state
    /// Article list wrapped in Arc so the filtered-view cache can alias it
    /// without cloning. Fully replaced (never merged) on each fetch.
    pub articles: Arc<Vec<FeedItem>>,
    /// True while a fetch is in flight; the grid shows placeholders.
    pub loading: bool,
    /// True if the most recent fetch failed.
    pub error: bool,
    /// Active category filter.
    pub filter: Filter,
    /// Synthesis briefing text. Deliberately NOT cleared on fetch failure:
    /// the panel shows its error branch instead, and the old text returns
    /// only if a later response carries none. Matches the shipped behavior.
    pub synthesis: String,

    // Grid state
    /// Index of the selected card within the filtered view.
    pub selected_card: usize,
    /// First visible card row. Adjusted to keep the selection on screen.
    pub grid_scroll_row: usize,
    /// Column count from the last render, for row-wise navigation.
    pub grid_columns: usize,
    /// Visible card rows from the last render, for scroll clamping.
    pub grid_viewport_rows: usize,

    // UI state
    pub needs_redraw: bool,
    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,
    /// Status message with expiry — Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    // Fetch coordination
    /// Monotonic counter tagging each fetch. Only the response matching the
    /// latest issued generation is applied, so a slow superseded request can
    /// never overwrite a newer one regardless of completion order.
    pub fetch_generation: u64,
    /// Abort handle for the in-flight fetch task, replaced on refresh.
    pub fetch_abort: Option<AbortHandle>,

    /// Memoized filtered view: valid for exactly one (articles, filter)
    /// pair. Cleared whenever either input changes, never otherwise.
    filtered_cache: Option<(Filter, Arc<Vec<FeedItem>>)>,
}

impl App {
    pub fn new(backend_base_url: String, theme_variant: ThemeVariant) -> Result<Self> {
        // One request at a time in practice, but keepalive avoids a fresh
        // handshake on every manual refresh against the same host
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .timeout(crate::feed::FEED_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            backend_base_url,
            theme_variant,
            theme: theme_variant.palette(),
            articles: Arc::new(Vec::new()),
            loading: false,
            error: false,
            filter: Filter::All,
            synthesis: String::new(),
            selected_card: 0,
            grid_scroll_row: 0,
            grid_columns: 1,
            grid_viewport_rows: 1,
            needs_redraw: true,
            spinner_frame: 0,
            status_message: None,
            fetch_generation: 0,
            fetch_abort: None,
            filtered_cache: None,
        })
    }

    // ------------------------------------------------------------------
    // Fetch transitions
    // ------------------------------------------------------------------

    /// Mark a fetch as started and return its generation tag.
    ///
    /// Entering the loading state clears the error flag; the grid renders
    /// placeholders until the tagged response arrives.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = false;
        self.spinner_frame = 0;
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.needs_redraw = true;
        self.fetch_generation
    }

    /// Apply a completed fetch. Returns false if the response was stale
    /// (superseded by a newer fetch) and was discarded untouched.
    pub fn on_feed_fetched(
        &mut self,
        generation: u64,
        result: Result<FeedResponse, String>,
    ) -> bool {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                latest = self.fetch_generation,
                "Discarding stale feed response"
            );
            return false;
        }
        match result {
            Ok(feed) => self.apply_fetch_success(feed),
            Err(error) => {
                tracing::warn!(error = %error, "Feed fetch failed");
                self.apply_fetch_failure();
            }
        }
        true
    }

    fn apply_fetch_success(&mut self, feed: FeedResponse) {
        self.articles = Arc::new(feed.articles);
        self.synthesis = if feed.synthesis.is_empty() {
            SYNTHESIS_FALLBACK.to_string()
        } else {
            feed.synthesis
        };
        self.loading = false;
        self.error = false;
        self.invalidate_filtered();
        self.clamp_selection();
        self.needs_redraw = true;
    }

    fn apply_fetch_failure(&mut self) {
        self.error = true;
        self.articles = Arc::new(Vec::new());
        self.loading = false;
        // self.synthesis intentionally untouched — see field docs
        self.invalidate_filtered();
        self.clamp_selection();
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    /// Switch the category filter. Selecting the already-active filter is a
    /// no-op (no cache invalidation, no redraw) and returns false.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.selected_card = 0;
        self.grid_scroll_row = 0;
        self.invalidate_filtered();
        self.needs_redraw = true;
        true
    }

    /// The filtered view, memoized per (articles, filter) pair.
    ///
    /// Repeated calls without an intervening fetch or filter change return
    /// the same `Arc` (pointer-stable, no recompute).
    pub fn filtered(&mut self) -> Arc<Vec<FeedItem>> {
        if let Some((filter, ref cached)) = self.filtered_cache {
            if filter == self.filter {
                return Arc::clone(cached);
            }
        }
        let items = self.filtered_uncached();
        self.filtered_cache = Some((self.filter, Arc::clone(&items)));
        items
    }

    fn filtered_uncached(&self) -> Arc<Vec<FeedItem>> {
        match self.filter {
            Filter::All => Arc::clone(&self.articles),
            filter => Arc::new(
                self.articles
                    .iter()
                    .filter(|item| filter.matches(item.kind))
                    .cloned()
                    .collect(),
            ),
        }
    }

    fn invalidate_filtered(&mut self) {
        self.filtered_cache = None;
    }

    // ------------------------------------------------------------------
    // Grid selection
    // ------------------------------------------------------------------

    /// Currently selected card (bounds-checked against the filtered view).
    pub fn selected_item(&mut self) -> Option<FeedItem> {
        let items = self.filtered();
        items.get(self.selected_card).cloned()
    }

    /// Clamp selection and scroll to the filtered view's bounds.
    ///
    /// Call after any operation that may shrink the visible set (fetch
    /// completion, filter change).
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected_card = if len == 0 {
            0
        } else {
            self.selected_card.min(len - 1)
        };
        let columns = self.grid_columns.max(1);
        let rows = len.div_ceil(columns);
        self.grid_scroll_row = self.grid_scroll_row.min(rows.saturating_sub(1));
    }

    /// Move selection by one card to the right.
    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected_card = (self.selected_card + 1).min(len - 1);
            self.ensure_selected_visible();
        }
    }

    /// Move selection by one card to the left.
    pub fn select_prev(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Move selection one grid row down.
    pub fn select_down(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        let columns = self.grid_columns.max(1);
        let target = self.selected_card + columns;
        if target < len {
            self.selected_card = target;
        } else {
            self.selected_card = len - 1;
        }
        self.ensure_selected_visible();
    }

    /// Move selection one grid row up.
    pub fn select_up(&mut self) {
        let columns = self.grid_columns.max(1);
        self.selected_card = self.selected_card.saturating_sub(columns);
        self.ensure_selected_visible();
    }

    /// Jump to the first card.
    pub fn select_first(&mut self) {
        self.selected_card = 0;
        self.ensure_selected_visible();
    }

    /// Jump to the last card.
    pub fn select_last(&mut self) {
        let len = self.filtered().len();
        self.selected_card = len.saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Record the grid geometry from the current render pass and re-clamp
    /// scroll so the selection stays visible after a resize.
    pub fn sync_grid_viewport(&mut self, columns: usize, viewport_rows: usize) {
        self.grid_columns = columns.max(1);
        self.grid_viewport_rows = viewport_rows.max(1);
        self.ensure_selected_visible();
    }

    /// Scroll the grid so the selected card's row is on screen.
    fn ensure_selected_visible(&mut self) {
        let columns = self.grid_columns.max(1);
        let viewport = self.grid_viewport_rows.max(1);
        let row = self.selected_card / columns;
        if row < self.grid_scroll_row {
            self.grid_scroll_row = row;
        } else if row >= self.grid_scroll_row + viewport {
            self.grid_scroll_row = row + 1 - viewport;
        }
    }

    // ------------------------------------------------------------------
    // Theme and status
    // ------------------------------------------------------------------

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = variant.palette();
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant (Dark → Light → Dark).
    ///
    /// Returns the name of the new theme for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    /// Set status message (will auto-expire after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

/// Abort the in-flight fetch on App drop so no orphaned task outlives the
/// event loop.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_abort.take() {
            handle.abort();
            tracing::debug!("Aborted feed fetch task on App drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ItemKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        App::new("http://127.0.0.1:8000".to_string(), ThemeVariant::Dark).unwrap()
    }

    fn test_item(id: &str, kind: ItemKind) -> FeedItem {
        FeedItem {
            id: id.to_string(),
            kind,
            title: format!("Title {}", id),
            summary: "Summary".to_string(),
            url: format!("http://example.com/{}", id),
            source: "arXiv".to_string(),
            author: None,
            date: "2024-01-01".to_string(),
        }
    }

    fn feed_of(items: Vec<FeedItem>) -> FeedResponse {
        FeedResponse {
            articles: items,
            synthesis: "S".to_string(),
            timestamp: None,
        }
    }

    // Initial state and fetch lifecycle

    #[test]
    fn test_initial_state() {
        let app = test_app();
        assert!(app.articles.is_empty());
        assert!(!app.loading);
        assert!(!app.error);
        assert_eq!(app.filter, Filter::All);
        assert_eq!(app.synthesis, "");
    }

    #[test]
    fn test_begin_fetch_sets_loading_clears_error() {
        let mut app = test_app();
        app.error = true;
        let generation = app.begin_fetch();
        assert!(app.loading);
        assert!(!app.error);
        assert_eq!(generation, app.fetch_generation);
    }

    #[test]
    fn test_success_replaces_articles_and_synthesis() {
        let mut app = test_app();
        let generation = app.begin_fetch();
        let applied = app.on_feed_fetched(
            generation,
            Ok(feed_of(vec![test_item("1", ItemKind::Paper)])),
        );
        assert!(applied);
        assert!(!app.loading);
        assert!(!app.error);
        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.synthesis, "S");
    }

    #[test]
    fn test_missing_synthesis_uses_fallback() {
        let mut app = test_app();
        let generation = app.begin_fetch();
        app.on_feed_fetched(
            generation,
            Ok(FeedResponse {
                articles: vec![],
                synthesis: String::new(),
                timestamp: None,
            }),
        );
        assert_eq!(app.synthesis, "No synthesis data available.");
    }

    #[test]
    fn test_failure_clears_articles_keeps_synthesis() {
        let mut app = test_app();
        let generation = app.begin_fetch();
        app.on_feed_fetched(generation, Ok(feed_of(vec![test_item("1", ItemKind::News)])));
        assert_eq!(app.synthesis, "S");

        let generation = app.begin_fetch();
        app.on_feed_fetched(generation, Err("connection refused".to_string()));
        assert!(app.error);
        assert!(!app.loading);
        assert!(app.articles.is_empty());
        // The stale-synthesis quirk: previous text survives a failure
        assert_eq!(app.synthesis, "S");
    }

    #[test]
    fn test_refresh_after_failure_fully_replaces_state() {
        let mut app = test_app();
        let generation = app.begin_fetch();
        app.on_feed_fetched(generation, Err("down".to_string()));
        assert!(app.error);

        let generation = app.begin_fetch();
        app.on_feed_fetched(
            generation,
            Ok(FeedResponse {
                articles: vec![test_item("2", ItemKind::News)],
                synthesis: "Fresh".to_string(),
                timestamp: None,
            }),
        );
        assert!(!app.error);
        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.synthesis, "Fresh");
    }

    // Generation tagging

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = test_app();
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        // The older fetch resolves after the newer one was issued
        let applied = app.on_feed_fetched(first, Ok(feed_of(vec![test_item("old", ItemKind::News)])));
        assert!(!applied);
        assert!(app.loading); // still waiting on the latest fetch
        assert!(app.articles.is_empty());

        let applied = app.on_feed_fetched(
            second,
            Ok(feed_of(vec![test_item("new", ItemKind::News)])),
        );
        assert!(applied);
        assert_eq!(app.articles[0].id, "new");
    }

    #[test]
    fn test_stale_failure_cannot_clobber_newer_success() {
        let mut app = test_app();
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        app.on_feed_fetched(second, Ok(feed_of(vec![test_item("1", ItemKind::Paper)])));
        let applied = app.on_feed_fetched(first, Err("timed out".to_string()));
        assert!(!applied);
        assert!(!app.error);
        assert_eq!(app.articles.len(), 1);
    }

    // Filter semantics and memoization

    fn app_with_mixed_articles() -> App {
        let mut app = test_app();
        let generation = app.begin_fetch();
        app.on_feed_fetched(
            generation,
            Ok(feed_of(vec![
                test_item("n1", ItemKind::News),
                test_item("p1", ItemKind::Paper),
                test_item("o1", ItemKind::Other),
                test_item("n2", ItemKind::News),
            ])),
        );
        app
    }

    #[test]
    fn test_filter_all_preserves_order() {
        let mut app = app_with_mixed_articles();
        let items = app.filtered();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "p1", "o1", "n2"]);
    }

    #[test]
    fn test_specific_filters_exclude_other_kinds() {
        let mut app = app_with_mixed_articles();

        app.set_filter(Filter::News);
        let news: Vec<String> = app.filtered().iter().map(|i| i.id.clone()).collect();
        assert_eq!(news, vec!["n1", "n2"]);

        app.set_filter(Filter::Paper);
        let papers: Vec<String> = app.filtered().iter().map(|i| i.id.clone()).collect();
        assert_eq!(papers, vec!["p1"]);
    }

    #[test]
    fn test_filtered_is_memoized_until_inputs_change() {
        let mut app = app_with_mixed_articles();
        app.set_filter(Filter::News);

        let first = app.filtered();
        let second = app.filtered();
        assert!(Arc::ptr_eq(&first, &second));

        // New articles invalidate the cache
        let generation = app.begin_fetch();
        app.on_feed_fetched(generation, Ok(feed_of(vec![test_item("n3", ItemKind::News)])));
        let third = app.filtered();
        assert!(!Arc::ptr_eq(&second, &third));
    }

    #[test]
    fn test_reselecting_active_filter_is_noop() {
        let mut app = app_with_mixed_articles();
        app.set_filter(Filter::News);
        app.selected_card = 1;
        let cached = app.filtered();
        let generation_before = app.fetch_generation;

        let changed = app.set_filter(Filter::News);
        assert!(!changed);
        // No state change: selection, cache, and fetch counter all untouched
        assert_eq!(app.selected_card, 1);
        assert!(Arc::ptr_eq(&cached, &app.filtered()));
        assert_eq!(app.fetch_generation, generation_before);
    }

    #[test]
    fn test_filter_change_resets_selection() {
        let mut app = app_with_mixed_articles();
        app.selected_card = 3;
        assert!(app.set_filter(Filter::Paper));
        assert_eq!(app.selected_card, 0);
    }

    proptest! {
        /// The displayed sequence is exactly the order-preserving subset of
        /// articles whose kind matches the filter.
        #[test]
        fn prop_filtered_is_order_preserving_subset(
            kinds in proptest::collection::vec(0u8..3, 0..40),
            filter_idx in 0usize..3,
        ) {
            let items: Vec<FeedItem> = kinds
                .iter()
                .enumerate()
                .map(|(i, k)| {
                    let kind = match k {
                        0 => ItemKind::News,
                        1 => ItemKind::Paper,
                        _ => ItemKind::Other,
                    };
                    test_item(&format!("id-{}", i), kind)
                })
                .collect();
            let filter = Filter::OPTIONS[filter_idx];

            let mut app = test_app();
            let generation = app.begin_fetch();
            app.on_feed_fetched(generation, Ok(feed_of(items.clone())));
            app.set_filter(filter);

            let expected: Vec<FeedItem> = items
                .into_iter()
                .filter(|item| filter.matches(item.kind))
                .collect();
            let filtered = app.filtered();
            prop_assert_eq!(filtered.as_slice(), expected.as_slice());
        }
    }

    // Selection and navigation

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut app = app_with_mixed_articles();
        app.selected_card = 3;
        let generation = app.begin_fetch();
        app.on_feed_fetched(generation, Ok(feed_of(vec![test_item("1", ItemKind::News)])));
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_row_navigation_uses_column_count() {
        let mut app = app_with_mixed_articles();
        app.grid_columns = 2;
        app.select_down();
        assert_eq!(app.selected_card, 2);
        app.select_up();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_navigation_saturates_at_bounds() {
        let mut app = app_with_mixed_articles();
        app.select_prev();
        assert_eq!(app.selected_card, 0);
        app.select_last();
        assert_eq!(app.selected_card, 3);
        app.select_next();
        assert_eq!(app.selected_card, 3);
    }

    #[test]
    fn test_navigation_on_empty_grid() {
        let mut app = test_app();
        app.select_next();
        app.select_down();
        app.select_last();
        assert_eq!(app.selected_card, 0);
        assert!(app.selected_item().is_none());
    }

    // Status message expiry with time control

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_cycle_theme_round_trips() {
        let mut app = test_app();
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.cycle_theme(), "Dark");
    }
}
