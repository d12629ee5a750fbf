//! Domain identifier types with validation
//!
//! Newtype wrappers keep the document id from being confused with other
//! strings flowing through the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Staffing extract identifier newtype wrapper
///
/// The document id in Cosmos DB. Caller-supplied and unique within the
/// container; re-upserting the same id overwrites the stored document.
///
/// # Examples
///
/// ```
/// use rfpstore::domain::ids::ExtractId;
/// use std::str::FromStr;
///
/// let id = ExtractId::from_str("5b2d6c1e-8a74-4f3a-9c21-7f0d2b9e4a11").unwrap();
/// assert_eq!(id.as_str(), "5b2d6c1e-8a74-4f3a-9c21-7f0d2b9e4a11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractId(String);

impl ExtractId {
    /// Creates a new ExtractId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or whitespace-only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Extract ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Generates a fresh random id (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExtractId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ExtractId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_valid() {
        let id = ExtractId::new("extract-123").unwrap();
        assert_eq!(id.as_str(), "extract-123");
        assert_eq!(id.to_string(), "extract-123");
    }

    #[test]
    fn test_extract_id_empty() {
        assert!(ExtractId::new("").is_err());
        assert!(ExtractId::new("   ").is_err());
    }

    #[test]
    fn test_extract_id_generate_unique() {
        let a = ExtractId::generate();
        let b = ExtractId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36); // Hyphenated UUID
    }

    #[test]
    fn test_extract_id_serde_transparent() {
        let id = ExtractId::new("extract-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"extract-123\"");

        let parsed: ExtractId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_extract_id_into_inner() {
        let id = ExtractId::new("extract-123").unwrap();
        assert_eq!(id.into_inner(), "extract-123");
    }
}
