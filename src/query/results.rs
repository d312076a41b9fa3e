use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::ontology::entities::{Category, Entity};

/// A single `(category, name)` match produced by a query, destined for
/// display as `"<Label>: <name>"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// Category the matched entity belongs to.
    pub category: Category,
    /// Entity name as stored in the knowledge base.
    pub name: String,
}

impl ResultItem {
    /// Tags an entity with the category it was found under.
    #[must_use]
    pub fn tagged(category: Category, entity: &Entity) -> Self {
        Self {
            category,
            name: entity.name().to_string(),
        }
    }
}

impl Display for ResultItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category.label(), self.name)
    }
}

/// Outcome of a query operation.
///
/// Queries never return a silently empty sequence: when nothing is listed or
/// matched, the caller receives a marker message explaining why, so the
/// presentation layer always has a line to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResultSet {
    /// One or more matches, in category-block order.
    Hits {
        /// The matched items; never empty.
        items: Vec<ResultItem>,
    },
    /// Nothing listed or matched; the message says which of the two.
    Empty {
        /// Human readable explanation.
        message: String,
    },
}

impl ResultSet {
    /// Wraps the collected items, falling back to the supplied marker message
    /// when no item was produced.
    #[must_use]
    pub fn from_items(items: Vec<ResultItem>, on_empty: impl FnOnce() -> String) -> Self {
        if items.is_empty() {
            Self::Empty {
                message: on_empty(),
            }
        } else {
            Self::Hits { items }
        }
    }

    /// Returns the matched items, or `None` for the empty marker.
    #[must_use]
    pub fn items(&self) -> Option<&[ResultItem]> {
        match self {
            Self::Hits { items } => Some(items),
            Self::Empty { .. } => None,
        }
    }

    /// Returns the marker message, or `None` when there are matches.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Hits { .. } => None,
            Self::Empty { message } => Some(message),
        }
    }

    /// Renders the result set as display lines, one per item or the single
    /// marker line, ready for a list widget.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Hits { items } => items.iter().map(ToString::to_string).collect(),
            Self::Empty { message } => vec![message.clone()],
        }
    }
}
