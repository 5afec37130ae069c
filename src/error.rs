//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Contact name is malformed or empty where one is required
    #[error("Invalid contact name: {0:?}")]
    InvalidContact(String),

    /// Phone number fails the format rule, or edit arguments are empty/equal
    #[error("Invalid phone number: {0}")]
    InvalidNumber(String),

    /// Phone number already present on the record
    #[error("Contact {contact} already has the phone number {phone}")]
    DuplicatePhoneNumber { contact: String, phone: String },

    /// Contact name already present in the address book
    #[error("Contact with name {0:?} already exists")]
    DuplicateContact(String),

    /// Phone number not present on the record
    #[error("Phone number not found: {0}")]
    PhoneNumberNotFound(String),

    /// More than one phone matches where exactly one is required
    #[error("Phone number {phone} matches {matches} entries, expected exactly one")]
    AmbiguousPhoneNumber { phone: String, matches: usize },

    /// Contact name not present in the address book
    #[error("Contact not found: {0:?}")]
    ContactNotFound(String),
}

impl From<ValidationError> for AddressBookError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => Self::InvalidNumber(format!(
                "{:?} must consist of {} characters",
                phone,
                crate::domain::PHONE_LENGTH
            )),
            ValidationError::EmptyName => {
                Self::InvalidContact("cannot add a contact without a name".to_string())
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: \"John\"");

        let err = AddressBookError::PhoneNumberNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_OUTPUT".to_string(),
            reason: "Must be one of: text, json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_OUTPUT: Must be one of: text, json"
        );
    }

    #[test]
    fn test_duplicate_phone_display() {
        let err = AddressBookError::DuplicatePhoneNumber {
            contact: "John".to_string(),
            phone: "1234567890".to_string(),
        };
        assert!(err.to_string().contains("John"));
        assert!(err.to_string().contains("1234567890"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: AddressBookError = ValidationError::InvalidPhone("123".to_string()).into();
        assert!(matches!(err, AddressBookError::InvalidNumber(_)));

        let err: AddressBookError = ValidationError::EmptyName.into();
        assert!(matches!(err, AddressBookError::InvalidContact(_)));
    }
}
