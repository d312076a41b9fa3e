//! Query operations over a loaded knowledge base.
//!
//! Exposes the [`QueryEngine`] with one parameterized category listing and
//! one unified substring search, together with the result DTOs handed to the
//! presentation layer.

pub mod engine;
pub mod results;

pub use engine::{QueryEngine, QueryError};
pub use results::{ResultItem, ResultSet};
