//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Serialized shape of a record, validated through [`Record::add_phone`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<String>,
}

/// A contact: one name and an ordered list of distinct phone numbers.
///
/// Phones keep their insertion order. An edited phone stays at its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Number of phones on the record.
    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Whether a phone with this (trimmed) value is on the record.
    pub fn has_phone(&self, phone: &str) -> bool {
        let phone = phone.trim();
        self.phones.iter().any(|p| p == phone)
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// - `InvalidNumber` if the number is not ten characters once trimmed
    /// - `DuplicatePhoneNumber` if the record already holds this number
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = Phone::new(phone)?;

        if self.has_phone(phone.as_str()) {
            return Err(self.duplicate(phone.into_inner()));
        }

        debug!(contact = %self.name, phone = %phone, "Phone number added");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `InvalidNumber` if either argument is empty, both are equal, or `new`
    ///   is malformed
    /// - `PhoneNumberNotFound` / `AmbiguousPhoneNumber` unless exactly one
    ///   phone equals `old`
    /// - `DuplicatePhoneNumber` if `new` is already on the record
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let (old, new) = (old.trim(), new.trim());
        if old.is_empty() || new.is_empty() || old == new {
            return Err(AddressBookError::InvalidNumber(format!(
                "cannot replace {:?} with {:?}",
                old, new
            )));
        }

        let index = self.locate_phone(old)?;
        let phone = Phone::new(new)?;
        if self.has_phone(phone.as_str()) {
            return Err(self.duplicate(phone.into_inner()));
        }

        debug!(contact = %self.name, old, new = %phone, "Phone number updated");
        self.phones[index] = phone;
        Ok(())
    }

    /// Return the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// - `InvalidNumber` if `phone` is empty
    /// - `PhoneNumberNotFound` if no phone matches
    pub fn find_phone(&self, phone: &str) -> AddressBookResult<&str> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(AddressBookError::InvalidNumber(
                "phone number cannot be empty".to_string(),
            ));
        }

        self.phones
            .iter()
            .find(|p| *p == phone)
            .map(Phone::as_str)
            .ok_or_else(|| AddressBookError::PhoneNumberNotFound(phone.to_string()))
    }

    /// Remove the phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// - `InvalidNumber` if `phone` is empty or not ten characters
    /// - `PhoneNumberNotFound` / `AmbiguousPhoneNumber` unless exactly one
    ///   phone matches
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<Phone> {
        let phone = phone.trim();
        if phone.is_empty() || !Phone::is_valid(phone) {
            return Err(AddressBookError::InvalidNumber(format!(
                "{:?} must consist of {} characters",
                phone,
                crate::domain::PHONE_LENGTH
            )));
        }

        let index = self.locate_phone(phone)?;
        let removed = self.phones.remove(index);
        debug!(contact = %self.name, phone = %removed, "Phone number deleted");
        Ok(removed)
    }

    /// Index of the single phone equal to `phone`.
    fn locate_phone(&self, phone: &str) -> AddressBookResult<usize> {
        let matches: Vec<usize> = self
            .phones
            .iter()
            .enumerate()
            .filter(|(_, p)| *p == phone)
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(AddressBookError::PhoneNumberNotFound(phone.to_string())),
            [index] => Ok(*index),
            _ => Err(AddressBookError::AmbiguousPhoneNumber {
                phone: phone.to_string(),
                matches: matches.len(),
            }),
        }
    }

    fn duplicate(&self, phone: String) -> AddressBookError {
        AddressBookError::DuplicatePhoneNumber {
            contact: self.name.to_string(),
            phone,
        }
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = AddressBookError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut record = Record {
            name: raw.name,
            phones: Vec::with_capacity(raw.phones.len()),
        };
        for phone in &raw.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new(" John ");
        assert_eq!(record.name().as_str(), "John");
        assert_eq!(record.phone_count(), 0);
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let record = john();
        assert_eq!(phone_values(&record), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_add_phone_trims_input() {
        let mut record = Record::new("John");
        record.add_phone("  1234567890 ").unwrap();
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_phone_rejects_bad_length() {
        let mut record = Record::new("John");
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, AddressBookError::InvalidNumber(_)));
        assert_eq!(record.phone_count(), 0);
    }

    #[test]
    fn test_add_phone_rejects_duplicate() {
        let mut record = john();
        let err = record.add_phone("1234567890").unwrap_err();
        assert_eq!(
            err,
            AddressBookError::DuplicatePhoneNumber {
                contact: "John".to_string(),
                phone: "1234567890".to_string(),
            }
        );
        assert_eq!(record.phone_count(), 2);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(phone_values(&record), vec!["1112223333", "5555555555"]);
        assert_eq!(record.find_phone("1112223333").unwrap(), "1112223333");
        assert_eq!(
            record.find_phone("1234567890"),
            Err(AddressBookError::PhoneNumberNotFound("1234567890".to_string()))
        );
    }

    #[test]
    fn test_edit_phone_rejects_equal_arguments() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1234567890", "1234567890"),
            Err(AddressBookError::InvalidNumber(_))
        ));
        // Also when the phone does not exist.
        assert!(matches!(
            record.edit_phone("0000000000", "0000000000"),
            Err(AddressBookError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_edit_phone_rejects_empty_arguments() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("", "1112223333"),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert!(matches!(
            record.edit_phone("1234567890", "   "),
            Err(AddressBookError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = john();
        assert_eq!(
            record.edit_phone("0000000000", "1112223333"),
            Err(AddressBookError::PhoneNumberNotFound("0000000000".to_string()))
        );
        assert_eq!(phone_values(&record), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_malformed_new_leaves_record_unchanged() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1234567890", "123"),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert_eq!(phone_values(&record), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_into_existing_number_is_duplicate() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1234567890", "5555555555"),
            Err(AddressBookError::DuplicatePhoneNumber { .. })
        ));
        assert_eq!(phone_values(&record), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_ambiguous_match_is_reported() {
        let phone = Phone::new("1234567890").unwrap();
        let mut record = Record {
            name: Name::new("John"),
            phones: vec![phone.clone(), phone],
        };
        assert_eq!(
            record.remove_phone("1234567890"),
            Err(AddressBookError::AmbiguousPhoneNumber {
                phone: "1234567890".to_string(),
                matches: 2,
            })
        );
        assert!(matches!(
            record.edit_phone("1234567890", "1112223333"),
            Err(AddressBookError::AmbiguousPhoneNumber { matches: 2, .. })
        ));
        assert_eq!(record.phone_count(), 2);
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        assert_eq!(record.find_phone("5555555555").unwrap(), "5555555555");
        assert!(matches!(
            record.find_phone(""),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert!(matches!(
            record.find_phone("0000000000"),
            Err(AddressBookError::PhoneNumberNotFound(_))
        ));
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert_eq!(phone_values(&record), vec!["5555555555"]);
    }

    #[test]
    fn test_phone_arguments_are_trimmed() {
        let mut record = john();
        assert_eq!(record.find_phone(" 1234567890 ").unwrap(), "1234567890");
        assert!(record.has_phone("5555555555\t"));

        assert!(matches!(
            record.edit_phone(" 1234567890", "1234567890 "),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert_eq!(phone_values(&record), vec!["1234567890", "5555555555"]);

        let removed = record.remove_phone(" 1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert_eq!(phone_values(&record), vec!["5555555555"]);

        record.edit_phone("5555555555 ", " 1112223333").unwrap();
        assert_eq!(phone_values(&record), vec!["1112223333"]);
    }

    #[test]
    fn test_remove_phone_validates_argument() {
        let mut record = john();
        assert!(matches!(
            record.remove_phone(""),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert!(matches!(
            record.remove_phone("12345"),
            Err(AddressBookError::InvalidNumber(_))
        ));
        assert!(matches!(
            record.remove_phone("0000000000"),
            Err(AddressBookError::PhoneNumberNotFound(_))
        ));
        assert_eq!(record.phone_count(), 2);
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            john().to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
        assert_eq!(Record::new("Jane").to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "John", "phones": ["1234567890", "5555555555"] })
        );
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let record: Record =
            serde_json::from_str(r#"{"name": "John", "phones": ["1234567890"]}"#).unwrap();
        assert_eq!(record.phone_count(), 1);

        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["1234567890", "1234567890"]}"#);
        assert!(result.is_err());

        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["123"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_deserialization_defaults_phones() {
        let record: Record = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(record.phone_count(), 0);
    }
}
