//! Guestbook endpoints
//!
//! `GET` lists every entry, `POST` creates one. Both answer 200 with the
//! entries as JSON; nothing is transformed on the way through.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{GuestbookEntry, NewEntry};

/// Path prefix for the guestbook resource
pub const PATH: &str = "/api/guestbook";

/// GET /api/guestbook - list all entries
async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestbookEntry>>, ApiError> {
    let entries = state.store.list_all().await?;
    tracing::debug!(count = entries.len(), "Listed guestbook entries");
    Ok(Json(entries))
}

/// POST /api/guestbook - create an entry
async fn create_entry(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewEntry>,
) -> Result<Json<GuestbookEntry>, ApiError> {
    let entry = state.store.create(new).await?;
    tracing::info!(id = entry.id, "Created guestbook entry");
    Ok(Json(entry))
}

/// Guestbook routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(PATH, get(list_entries).post(create_entry))
}
