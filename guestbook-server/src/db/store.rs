//! Entry store trait and implementations
//!
//! Provides the persistence seam used by the HTTP layer, with:
//! - PostgreSQL implementation delegating to [`EntryRepo`]
//! - In-memory implementation for testing

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::repos::{DbError, EntryRepo};
use crate::models::{GuestbookEntry, NewEntry};

/// Persistence operations for guestbook entries (testable)
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Every stored entry, in the store's own order.
    async fn list_all(&self) -> Result<Vec<GuestbookEntry>, DbError>;

    /// Persist a new entry, returning it with `id` and `created_at` filled in.
    async fn create(&self, new: NewEntry) -> Result<GuestbookEntry, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn list_all(&self) -> Result<Vec<GuestbookEntry>, DbError> {
        EntryRepo::new(&self.pool).list_all().await
    }

    async fn create(&self, new: NewEntry) -> Result<GuestbookEntry, DbError> {
        EntryRepo::new(&self.pool).create(new).await
    }
}

/// In-memory store for testing
///
/// Ids start at 1 and are never reused. Entries are listed in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<GuestbookEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<GuestbookEntry>, DbError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn create(&self, new: NewEntry) -> Result<GuestbookEntry, DbError> {
        let mut entries = self.entries.lock().unwrap();
        let id = entries.last().map_or(1, |last| last.id + 1);
        let entry = new.into_entry(id, Utc::now());
        entries.push(entry.clone());
        Ok(entry)
    }
}
