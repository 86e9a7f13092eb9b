//! Named list repository (PostgreSQL)
//!
//! Embedded items live in a JSONB array on the list row:
//! - create_if_absent: INSERT ... ON CONFLICT DO NOTHING
//! - append/remove: single UPDATE on the array, no read-modify-write

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, ListStore};
use crate::models::{Item, TodoList};

/// List record from database
#[derive(Debug, Clone, FromRow)]
struct ListRow {
    id: Uuid,
    name: String,
    items: Json<Vec<Item>>,
    created_at: DateTime<Utc>,
}

impl From<ListRow> for TodoList {
    fn from(row: ListRow) -> Self {
        TodoList {
            id: row.id,
            name: row.name,
            items: row.items.0,
            created_at: row.created_at,
        }
    }
}

/// List repository
#[derive(Clone)]
pub struct PgListRepo {
    pool: PgPool,
}

impl PgListRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListStore for PgListRepo {
    async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>, DbError> {
        let row: Option<ListRow> = sqlx::query_as(
            "SELECT id, name, items, created_at FROM lists WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoList::from))
    }

    async fn create(&self, name: &str, items: &[Item]) -> Result<TodoList, DbError> {
        let result = sqlx::query_as::<_, ListRow>(
            r#"
            INSERT INTO lists (id, name, items)
            VALUES ($1, $2, $3)
            RETURNING id, name, items, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Json(items))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::DuplicateKey {
                    resource: "list",
                    key: name.to_owned(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_if_absent(&self, name: &str, items: &[Item]) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO lists (id, name, items)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Json(items))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn append_item(&self, list: &str, item: &Item) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE lists SET items = items || jsonb_build_array($2::jsonb) WHERE name = $1",
        )
        .bind(list)
        .bind(Json(item))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::list_not_found(list));
        }
        Ok(())
    }

    async fn replace_items(&self, list: &str, items: &[Item]) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE lists SET items = $2 WHERE name = $1")
            .bind(list)
            .bind(Json(items))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::list_not_found(list));
        }
        Ok(())
    }

    async fn remove_item_by_id(&self, list: &str, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE lists
            SET items = COALESCE(
                (
                    SELECT jsonb_agg(elem ORDER BY ord)
                    FROM jsonb_array_elements(items) WITH ORDINALITY AS t(elem, ord)
                    WHERE elem->>'_id' <> $2
                ),
                '[]'::jsonb
            )
            WHERE name = $1
            "#,
        )
        .bind(list)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::list_not_found(list));
        }
        Ok(())
    }
}
