//! Identifier types for book entries.

use serde::Deserialize;
use std::fmt;

/// Unique identifier for a position within a book.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::PositionId;
///
/// let id = PositionId::new("PETR4-CALL-32");
/// assert_eq!(id.as_str(), "PETR4-CALL-32");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct PositionId(String);

impl PositionId {
    /// Creates a new position ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PositionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PositionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
