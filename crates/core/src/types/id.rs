//! Product identifiers.
//!
//! Catalog products are keyed by a human-readable slug such as
//! `"rolex-submariner"`. The slug is also what the visitor's cart stores,
//! so a `ProductId` read back from storage may name a product that no
//! longer exists. Resolution against the catalog is the caller's job.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A catalog product key.
///
/// ## Examples
///
/// ```
/// use chrono_royale_core::ProductId;
///
/// let id = ProductId::new("rolex-daytona");
/// assert_eq!(id.as_str(), "rolex-daytona");
/// assert_eq!(id, "rolex-daytona");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProductId::new("patek-nautilus");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"patek-nautilus\"");

        let parsed: ProductId = serde_json::from_str("\"patek-nautilus\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_compares_with_str() {
        let id = ProductId::from("rm-011");
        assert_eq!(id, "rm-011");
        assert_ne!(id, "rm-035");
        assert_eq!(id.to_string(), "rm-011");
    }
}
