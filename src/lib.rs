//! Browsing and unified search core for loaded ontology knowledge bases.
//!
//! An external loader materializes a [`KnowledgeBase`] of classes,
//! individuals, object properties, and data properties; a presentation layer
//! then drives the [`QueryEngine`] to enumerate a category or run an ad-hoc
//! case-insensitive substring search across all four categories at once, and
//! renders the returned [`ResultSet`] line by line.
//!
//! ```
//! use ontology_explorer::{KnowledgeBase, QueryEngine};
//!
//! let mut kb = KnowledgeBase::new().with_label("Math Area Tutor");
//! kb.add_class("Polynomial")?;
//! kb.add_individual("Euclid")?;
//!
//! let engine = QueryEngine::new(&kb);
//! let results = engine.search("poly")?;
//! assert_eq!(results.lines(), vec!["Class: Polynomial".to_string()]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ontology;
pub mod query;

pub use ontology::{
    Category, Entity, EntityName, EntityNameError, KnowledgeAccessor, KnowledgeBase,
    KnowledgeSummary,
};
pub use query::{QueryEngine, QueryError, ResultItem, ResultSet};
