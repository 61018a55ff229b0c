//! Schema bootstrap
//!
//! The unique index on `number` is what enforces one account per number;
//! the service-level existence check only produces the friendlier error.

use sqlx::PgPool;
use tracing::{info, instrument};

const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id            UUID PRIMARY KEY,
        number        TEXT NOT NULL,
        password_hash TEXT NOT NULL CHECK (password_hash <> ''),
        created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const CREATE_NUMBER_INDEX: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS users_number_key ON users (number)
";

/// Create the `users` table and its unique index if they do not exist
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_NUMBER_INDEX).execute(pool).await?;
    info!("users schema ready");
    Ok(())
}
