//! The address book: a keyed collection of records.

use super::record::Record;
use crate::error::{AddressBookError, AddressBookResult};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Records keyed by contact name, iterated in insertion order.
///
/// The book owns every record it holds. Lookups are exact and case-sensitive.
/// Records are stored under an increasing insertion sequence so that deleting
/// one contact never reorders the others.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<u64, Record>,
    index: HashMap<String, u64>,
    next_seq: u64,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name and return the stored record.
    ///
    /// # Errors
    ///
    /// - `InvalidContact` if the record's name is empty
    /// - `DuplicateContact` if a record with the same name already exists
    pub fn add_record(&mut self, record: Record) -> AddressBookResult<&mut Record> {
        let key = record.name().ensure_present()?.to_string();
        if self.index.contains_key(&key) {
            return Err(AddressBookError::DuplicateContact(key));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        debug!(contact = %key, phones = record.phone_count(), "Contact added");
        self.index.insert(key, seq);
        Ok(self.records.entry(seq).or_insert(record))
    }

    /// Look up a record by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no record has this name.
    pub fn find(&self, name: &str) -> AddressBookResult<&Record> {
        self.seq_of(name)
            .and_then(|seq| self.records.get(&seq))
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
    }

    /// Look up a record by name for editing.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no record has this name.
    pub fn find_mut(&mut self, name: &str) -> AddressBookResult<&mut Record> {
        match self.seq_of(name) {
            Some(seq) => self
                .records
                .get_mut(&seq)
                .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string())),
            None => Err(AddressBookError::ContactNotFound(name.to_string())),
        }
    }

    /// Remove a record by name.
    ///
    /// Returns `Ok(None)` when no record has this name; unlike [`find`](Self::find),
    /// a missing contact is not an error here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContact` if `name` is empty.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Option<Record>> {
        if name.trim().is_empty() {
            return Err(AddressBookError::InvalidContact(
                "name cannot be empty".to_string(),
            ));
        }

        let removed = self
            .index
            .remove(name)
            .and_then(|seq| self.records.remove(&seq));
        if removed.is_some() {
            debug!(contact = %name, "Contact deleted");
        }
        Ok(removed)
    }

    /// Whether a record is stored under exactly this name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.values().map(|r| r.name().as_str())
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.values(),
        }
    }

    fn seq_of(&self, name: &str) -> Option<u64> {
        self.index.get(name).copied()
    }
}

/// Iterator over the records of an [`AddressBook`].
pub struct Iter<'a> {
    inner: std::collections::btree_map::Values<'a, u64, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| (r.name().as_str(), r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serialized as an ordered list of records.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Replays `add_record` so duplicate or empty names are rejected.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record).map_err(D::Error::custom)?;
        }
        Ok(book)
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for AddressBook {}
