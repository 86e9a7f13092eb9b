//! PostgreSQL pool shared by the item and list repositories

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size when neither the config file nor `--max-connections` sets one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before the store call
/// fails (and the page handler redirects home).
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool with [`DEFAULT_MAX_CONNECTIONS`].
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/todolist").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Pool with a caller-chosen size; fails if the first connection cannot
/// be established.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to database");
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p todolist-server -- --ignored

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        // Nothing listens on port 1
        let result = create_pool_with_options("postgres://todolist@127.0.0.1:1/todolist", 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn zero_max_connections_still_serves_queries() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 0)
            .await
            .expect("pool creation failed");

        let (one,): (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(one, 1);
        assert_eq!(pool.options().get_max_connections(), 1);
    }
}
