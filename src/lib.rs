//! Address Book - an in-memory contact directory.
//!
//! Contacts are stored by name, each holding zero or more validated phone
//! numbers. Every operation validates its input up front and reports failures
//! through [`AddressBookError`]; nothing is mutated when a check fails.
//!
//! # Architecture
//!
//! - **domain**: `Name` and `Phone` value objects
//! - **models**: the `Record` entity and the `AddressBook` collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary, from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! let mut john = Record::new("John");
//! john.add_phone("1234567890")?;
//! book.add_record(john)?;
//!
//! book.find_mut("John")?.edit_phone("1234567890", "1112223333")?;
//! assert_eq!(book.find("John")?.find_phone("1112223333")?, "1112223333");
//! # Ok::<(), address_book::AddressBookError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ConfigResult};
pub use models::{AddressBook, Record};
