//! guestbook-server: HTTP server for the guestbook
//!
//! Lists and creates guestbook entries stored in a single PostgreSQL table.
//! The persistence layer lives in [`db`], the axum binding in [`http`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, EntryStore, MemoryStore, PgEntryStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{GuestbookEntry, NewEntry};
