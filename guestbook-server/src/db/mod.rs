//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One statement per operation; the store assigns ids
//! - Handlers talk to an [`EntryStore`], never to the pool directly

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, EntryRepo};
pub use store::{EntryStore, MemoryStore, PgEntryStore};
