use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Category record; name is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub async fn create(db: &PgPool, name: &str) -> sqlx::Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Full unordered scan.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM categories
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn update(db: &PgPool, id: Uuid, name: Option<&str>) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(db)
        .await
    }

    /// Deletes the row and returns its last state.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            DELETE FROM categories
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
