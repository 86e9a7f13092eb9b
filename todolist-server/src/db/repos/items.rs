//! Standalone item repository (PostgreSQL)
//!
//! - insert_defaults: advisory-locked transaction, seeds only an empty table
//! - find_all: ordered by insertion sequence

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, ItemStore};
use crate::models::{Item, ItemName};

/// Advisory lock key serialising default-item seeding across connections
const SEED_LOCK_KEY: i64 = 0x7464_5f73_6565_64;

/// Item record from database
#[derive(Debug, Clone, FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
        }
    }
}

/// Item repository
#[derive(Clone)]
pub struct PgItemRepo {
    pool: PgPool,
}

impl PgItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemRepo {
    async fn count_all(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_defaults(&self, items: &[Item]) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        // Concurrent seeders queue here; the loser sees a non-empty table.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        let names: Vec<String> = items.iter().map(|i| i.name.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO items (id, name)
            SELECT id, name
            FROM UNNEST($1::uuid[], $2::text[]) WITH ORDINALITY AS t(id, name, ord)
            ORDER BY ord
            "#,
        )
        .bind(&ids)
        .bind(&names)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Item>, DbError> {
        let rows: Vec<ItemRow> = sqlx::query_as("SELECT id, name FROM items ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let item = Item::new(name);
        let row: ItemRow = sqlx::query_as(
            r#"
            INSERT INTO items (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(%id, "no standalone item to delete");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::default_items;

    // Integration tests - run with DATABASE_URL set against a scratch database
    // cargo test -p todolist-server -- --ignored

    async fn repo() -> PgItemRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("DELETE FROM items")
            .execute(&pool)
            .await
            .expect("cleanup failed");
        PgItemRepo::new(pool)
    }

    // Single test: the table is shared, parallel tests would race on it.
    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_create_delete() {
        let repo = repo().await;

        assert!(repo.insert_defaults(&default_items()).await.unwrap());
        assert!(!repo.insert_defaults(&default_items()).await.unwrap());
        assert_eq!(repo.count_all().await.unwrap(), 3);

        let item = repo.create(ItemName::new("milk").unwrap()).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&item));

        repo.delete_by_id(item.id).await.unwrap();
        // Second delete is a no-op
        repo.delete_by_id(item.id).await.unwrap();
        assert_eq!(repo.count_all().await.unwrap(), 3);
    }
}
