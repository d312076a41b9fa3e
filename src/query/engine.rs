use thiserror::Error;

use crate::ontology::accessor::KnowledgeAccessor;
use crate::ontology::entities::Category;

use super::results::{ResultItem, ResultSet};

/// Stateless query facade over a borrowed knowledge base.
///
/// The engine holds nothing but the accessor reference: every call is a
/// single-shot, synchronous read that recomputes its result from scratch, so
/// identical inputs against an unchanged knowledge base always produce
/// identical output.
pub struct QueryEngine<'a> {
    knowledge: &'a dyn KnowledgeAccessor,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine reading from the supplied accessor.
    #[must_use]
    pub fn new(knowledge: &'a dyn KnowledgeAccessor) -> Self {
        Self { knowledge }
    }

    /// Lists every entity of one category, tagged with its label.
    ///
    /// An empty category yields the marker
    /// `"No <category-plural> found in the ontology."` rather than an empty
    /// sequence.
    #[must_use]
    pub fn fetch_category(&self, category: Category) -> ResultSet {
        let items: Vec<ResultItem> = self
            .knowledge
            .entities(category)
            .iter()
            .map(|entity| ResultItem::tagged(category, entity))
            .collect();
        tracing::debug!(category = %category, matches = items.len(), "fetch_category");
        ResultSet::from_items(items, || {
            format!("No {} found in the ontology.", category.plural())
        })
    }

    /// Searches all four categories for names containing the query.
    ///
    /// The query is trimmed and lowercased first; a query that normalizes to
    /// the empty string fails with [`QueryError::BlankQuery`] so the caller
    /// can prompt the user instead of showing zero results. Matching is
    /// case-insensitive contiguous substring containment, applied uniformly
    /// to every category; output is in category-block order with native
    /// order inside each block, and identically named entities in different
    /// categories each produce their own item.
    pub fn search(&self, query: &str) -> Result<ResultSet, QueryError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(QueryError::BlankQuery);
        }

        let mut items = Vec::new();
        for category in Category::ALL {
            for entity in self.knowledge.entities(category) {
                if entity.name().to_lowercase().contains(&needle) {
                    items.push(ResultItem::tagged(category, entity));
                }
            }
        }
        tracing::debug!(query = %needle, matches = items.len(), "search");
        Ok(ResultSet::from_items(items, || {
            format!("No results found for '{needle}'.")
        }))
    }
}

/// Errors raised when validating a query.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The search query was empty after trimming.
    #[error("search query must not be blank")]
    BlankQuery,
}
