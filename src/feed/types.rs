//! Wire types for the Cortex `/feed` contract.
//!
//! Everything here is deserialized verbatim from the backend and treated as
//! read-only display data. The dashboard never re-sorts, dedups, or merges
//! articles — each fetch fully replaces the previous set.

use serde::Deserialize;
use std::borrow::Cow;

/// Author sentinel sent by the backend when no single author is attributable.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Fallback shown when a successful response carries no synthesis text.
pub const SYNTHESIS_FALLBACK: &str = "No synthesis data available.";

/// Category discriminator for a feed item.
///
/// The backend only emits `"news"` and `"paper"` today, but the contract is
/// a free string, so anything else decodes to `Other` instead of failing the
/// whole payload. `Other` items are visible under the `All` filter only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    News,
    Paper,
    #[default]
    #[serde(other)]
    Other,
}

impl ItemKind {
    /// Badge text for the card corner.
    ///
    /// Deliberately a binary news/not-news branch, not a per-variant lookup:
    /// papers and unrecognized kinds both read "Research".
    pub fn badge_label(self) -> &'static str {
        match self {
            ItemKind::News => "Intel",
            _ => "Research",
        }
    }
}

/// One article/news item as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    /// Stable unique identifier, reused as the list key across refreshes.
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: String,
}

impl FeedItem {
    /// Author attribution line, or `None` when no author element is rendered.
    ///
    /// The `"Unknown"` sentinel means the backend could not attribute a
    /// single author and maps to "Multiple Authors".
    pub fn author_line(&self) -> Option<Cow<'_, str>> {
        match self.author.as_deref() {
            None => None,
            Some(UNKNOWN_AUTHOR) => Some(Cow::Borrowed("Multiple Authors")),
            Some(author) => Some(Cow::Owned(format!("By {}", author))),
        }
    }
}

/// The combined `/feed` payload: articles plus the synthesized briefing.
///
/// Both fields are defaulted so a sparse body decodes instead of erroring;
/// the missing-synthesis fallback is applied at the state layer. The
/// backend's `timestamp` field is tolerated and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub articles: Vec<FeedItem>,
    #[serde(default)]
    pub synthesis: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Category filter for the card grid.
///
/// Distinct from [`ItemKind`] on purpose: the filter is a closed three-way
/// enum over user-selectable options, while the badge on each card stays a
/// binary news/not-news mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Paper,
    News,
}

impl Filter {
    /// All filter options in display order.
    pub const OPTIONS: [Filter; 3] = [Filter::All, Filter::Paper, Filter::News];

    /// Label shown in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "Global Feed",
            Filter::Paper => "Research Papers",
            Filter::News => "Industry Intel",
        }
    }

    /// Whether an item of the given kind is visible under this filter.
    ///
    /// `Other` kinds never match a specific filter, only `All`.
    pub fn matches(self, kind: ItemKind) -> bool {
        match self {
            Filter::All => true,
            Filter::Paper => kind == ItemKind::Paper,
            Filter::News => kind == ItemKind::News,
        }
    }

    /// Cycle to the next option: All → Paper → News → All.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Paper,
            Filter::Paper => Filter::News,
            Filter::News => Filter::All,
        }
    }

    /// Position in [`Filter::OPTIONS`], used to highlight the active tab.
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Paper => 1,
            Filter::News => 2,
        }
    }
}
