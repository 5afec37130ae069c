//! Data models for the address book.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Iter};
pub use record::Record;
