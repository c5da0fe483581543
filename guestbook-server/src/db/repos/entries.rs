//! Guestbook entry repository
//!
//! - create: single INSERT ... RETURNING, timestamp stamped just before
//! - list: full-table SELECT, no ORDER BY (store order)
//!
//! Columns are cast on the way out so a table created ahead of time with
//! `integer` ids or a zone-less `timestamp` still decodes. Sessions run in
//! UTC, so a `timestamp` column holds UTC wall-clock time.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::{GuestbookEntry, NewEntry};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Entry repository
pub struct EntryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every entry in the order the store returns them.
    pub async fn list_all(&self) -> Result<Vec<GuestbookEntry>, DbError> {
        let entries = sqlx::query_as::<_, GuestbookEntry>(
            r#"
            SELECT id::bigint AS id, nickname, content, created_at::timestamptz AS created_at
            FROM guestbook
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Insert an entry and return it with its generated id and timestamp.
    pub async fn create(&self, new: NewEntry) -> Result<GuestbookEntry, DbError> {
        let created_at = Utc::now();

        let entry = sqlx::query_as::<_, GuestbookEntry>(
            r#"
            INSERT INTO guestbook (nickname, content, created_at)
            VALUES ($1, $2, $3)
            RETURNING id::bigint AS id, nickname, content, created_at::timestamptz AS created_at
            "#,
        )
        .bind(new.nickname)
        .bind(new.content)
        .bind(created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(entry)
    }
}
