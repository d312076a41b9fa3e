use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Value object ensuring that supplied text is a usable entity name.
///
/// Names arrive from an external loader and are stored verbatim; the
/// constructor only rejects empty or whitespace-only text so that a malformed
/// knowledge base fails fast at construction time rather than mid-query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityName {
    value: String,
}

impl EntityName {
    /// Validates and constructs a new [`EntityName`] value object.
    pub fn new(value: impl Into<String>) -> Result<Self, EntityNameError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EntityNameError::Blank);
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for EntityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for EntityName {
    type Err = EntityNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for EntityName {
    type Error = EntityNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating an [`EntityName`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EntityNameError {
    /// The provided text was empty or contained only whitespace.
    #[error("entity name must not be blank")]
    Blank,
}
