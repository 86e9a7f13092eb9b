//! Schema migrations for the item and list tables

use sqlx::PgPool;

/// Create tables if they do not exist yet.
///
/// Safe to run on every start.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running todolist migrations...");

    // Standalone items (the "Today" list). `seq` keeps insertion order.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL CHECK (btrim(name) <> ''),
            seq BIGSERIAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Named lists with their embedded items as a JSON array of {_id, name}
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            items JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_seq ON items(seq)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }
}
