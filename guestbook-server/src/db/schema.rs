//! Schema bootstrap for the guestbook table
//!
//! Idempotent; runs once at startup before the server binds.

use sqlx::PgPool;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS guestbook (
    id BIGSERIAL PRIMARY KEY,
    nickname TEXT,
    content TEXT,
    created_at TIMESTAMPTZ NOT NULL
)
"#;

/// Create the guestbook table if it does not exist.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring guestbook table");
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        ensure(&pool).await.expect("first ensure failed");
        ensure(&pool).await.expect("second ensure failed");
    }
}
