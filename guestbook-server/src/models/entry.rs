//! Guestbook entry record
//!
//! Entries are immutable once stored: the store assigns `id`, the create
//! operation stamps `created_at`, and nothing updates or deletes a row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored guestbook entry.
///
/// Serialized with camelCase keys (`createdAt`) for the browser frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    pub id: i64,
    pub nickname: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by create.
///
/// Unknown keys, including a caller-supplied `id` or `createdAt`, are
/// ignored. Missing fields are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewEntry {
    pub fn new(nickname: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
            content: Some(content.into()),
        }
    }

    /// Attach the store-generated id and creation time.
    pub fn into_entry(self, id: i64, created_at: DateTime<Utc>) -> GuestbookEntry {
        GuestbookEntry {
            id,
            nickname: self.nickname,
            content: self.content,
            created_at,
        }
    }
}
