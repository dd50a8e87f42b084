//! Saved-article list state.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::types::ArticleRow;

/// Shared article list state backed by the `articles` table.
#[derive(Clone, Debug, Default)]
pub struct ArticlesState {
    pub items: Vec<ArticleRow>,
    pub loading: bool,
    pub error: Option<String>,
    /// Article awaiting delete confirmation, if any.
    pub pending_delete: Option<String>,
}
