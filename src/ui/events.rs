//! Application event handling.
//!
//! This module processes background task completion events — in this
//! application, the outcome of a feed fetch.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
///
/// Returns true if the event changed state and a redraw is warranted. A
/// discarded stale fetch response leaves state untouched and returns false.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) -> bool {
    match event {
        AppEvent::FeedFetched { generation, result } => {
            let applied = app.on_feed_fetched(generation, result);
            if !applied {
                return false;
            }
            if app.error {
                app.set_status("Feed fetch failed. Press r to retry");
            } else {
                app.set_status(format!(
                    "Feed updated at {} ({} signals)",
                    chrono::Local::now().format("%H:%M:%S"),
                    app.articles.len()
                ));
            }
            true
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task = task, error = %error, "Background task panicked");
            // A panicked fetch would otherwise pin the loading state forever
            if app.loading {
                let generation = app.fetch_generation;
                app.on_feed_fetched(generation, Err(format!("task panicked: {}", error)));
            }
            app.set_status(format!("Internal error in {}: {}", task, error));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedItem, FeedResponse, ItemKind};
    use crate::theme::ThemeVariant;

    fn test_app() -> App {
        App::new("http://127.0.0.1:8000".to_string(), ThemeVariant::Dark).unwrap()
    }

    fn one_paper() -> FeedResponse {
        FeedResponse {
            articles: vec![FeedItem {
                id: "1".to_string(),
                kind: ItemKind::Paper,
                title: "X".to_string(),
                summary: "Y".to_string(),
                url: "http://a".to_string(),
                source: "arXiv".to_string(),
                author: None,
                date: "2024-01-01".to_string(),
            }],
            synthesis: "S".to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn test_fetched_event_applies_and_sets_status() {
        let mut app = test_app();
        let generation = app.begin_fetch();
        let changed = handle_app_event(
            &mut app,
            AppEvent::FeedFetched {
                generation,
                result: Ok(one_paper()),
            },
        );
        assert!(changed);
        assert!(!app.loading);
        assert_eq!(app.articles.len(), 1);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_stale_event_leaves_state_untouched() {
        let mut app = test_app();
        let old = app.begin_fetch();
        app.begin_fetch();
        let changed = handle_app_event(
            &mut app,
            AppEvent::FeedFetched {
                generation: old,
                result: Ok(one_paper()),
            },
        );
        // A discarded response must not warrant a redraw
        assert!(!changed);
        assert!(app.loading);
        assert!(app.articles.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_fetch_panic_resolves_to_error_state() {
        let mut app = test_app();
        app.begin_fetch();
        let changed = handle_app_event(
            &mut app,
            AppEvent::TaskPanicked {
                task: "feed_fetch",
                error: "boom".to_string(),
            },
        );
        assert!(changed);
        assert!(!app.loading);
        assert!(app.error);
    }
}
