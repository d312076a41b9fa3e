//! Core ontology domain primitives and contracts.
//!
//! The module defines the value objects and the knowledge base aggregate
//! describing a loaded ontology independently from loading or presentation
//! concerns, plus the read-only accessor contract the query engine is built
//! against. Only pure domain constructs live here.

pub mod accessor;
pub mod entities;
pub mod value_objects;

pub use accessor::{KnowledgeAccessor, KnowledgeSummary};
pub use entities::{Category, Entity, KnowledgeBase};
pub use value_objects::{EntityName, EntityNameError};
