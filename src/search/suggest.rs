//! Title suggestions for a partially typed query.

use super::matching::is_title_match;
use super::query::Query;
use crate::catalog::Catalog;
use serde::Serialize;

/// Maximum number of titles offered at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// Titles offered for one query, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    titles: Vec<String>,
    visible: bool,
}

impl SuggestionList {
    /// An empty, hidden list.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Shown iff non-empty, unless explicitly dismissed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Hide the list without clearing it.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// Compute suggestions for `raw_query`.
///
/// The first [`MAX_SUGGESTIONS`] matching titles are kept in catalog order;
/// there is no re-ranking.
pub fn suggest(catalog: &Catalog, raw_query: &str) -> SuggestionList {
    let query = Query::parse(raw_query);
    if query.is_empty() {
        return SuggestionList::hidden();
    }

    let titles: Vec<String> = catalog
        .items()
        .map(|item| item.title())
        .filter(|title| is_title_match(title, query.text()))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect();

    tracing::debug!("Suggestions for {:?}: {:?}", query.text(), titles);

    SuggestionList {
        visible: !titles.is_empty(),
        titles,
    }
}
