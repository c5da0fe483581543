//! Repository implementations for database access

pub mod entries;

pub use entries::{DbError, EntryRepo};
