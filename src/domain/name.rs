//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name of a contact.
///
/// Surrounding whitespace is trimmed at construction. An empty name is
/// representable here; it is the address book that refuses to store one
/// (see [`Name::ensure_present`]).
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("  John ");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name from the trimmed input.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the trimmed name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the name if it can be used as a directory key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn ensure_present(&self) -> Result<&str, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(self.as_str())
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Trimmed like `Name::new`; emptiness is checked by the address book.
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Name::new(s))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::new("\t John  \n");
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_allows_empty_at_construction() {
        let name = Name::new("   ");
        assert!(name.is_empty());
        assert_eq!(name.ensure_present(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_ensure_present() {
        let name = Name::new("Jane");
        assert_eq!(name.ensure_present(), Ok("Jane"));
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Jane");
        assert_eq!(format!("{}", name), "Jane");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("John");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"John\"");
    }

    #[test]
    fn test_name_deserialization_trims() {
        let name: Name = serde_json::from_str("\"  John \"").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_deserialization_rejects_non_string() {
        let result: Result<Name, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
