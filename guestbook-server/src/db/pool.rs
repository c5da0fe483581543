//! PostgreSQL pool for the guestbook store
//!
//! The pool is opened once at startup and lives for the whole process;
//! handlers borrow a connection per statement through [`super::PgEntryStore`].

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; every request holds at most one connection for one statement.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long startup and requests wait for a connection before failing.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Open the guestbook pool with default limits.
///
/// Fails when the database in `database_url` cannot be reached; the first
/// connection is established eagerly so a bad URL surfaces at startup.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Open the guestbook pool with an explicit connection cap and acquire timeout.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p guestbook-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        // Nothing listens on port 1
        let result = create_pool_with_options(
            "postgres://guestbook@127.0.0.1:1/guestbook",
            1,
            Duration::from_millis(500),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn malformed_url_is_an_error() {
        let result =
            create_pool_with_options("not a url", 1, Duration::from_millis(500)).await;

        assert!(result.is_err());
    }
}
