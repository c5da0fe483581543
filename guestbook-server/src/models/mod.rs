//! Domain models shared by the persistence and HTTP layers

pub mod entry;

pub use entry::{GuestbookEntry, NewEntry};
