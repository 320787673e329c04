use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Product record; category_id references categories(id) and the database
/// rejects writes naming a category that does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<Uuid>,
}

impl Product {
    pub async fn create(
        db: &PgPool,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        category_id: Option<Uuid>,
    ) -> sqlx::Result<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, category_id
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category_id)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Full unordered scan.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category_id
            FROM products
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Partial update. `name`/`price` keep the stored value on a NULL bind;
    /// `description`/`category_id` carry a separate "set" flag so an explicit
    /// null can clear the column.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: Option<&str>,
        price: Option<Decimal>,
        description: Option<Option<&str>>,
        category_id: Option<Option<Uuid>>,
    ) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                category_id = CASE WHEN $6 THEN $7 ELSE category_id END
            WHERE id = $1
            RETURNING id, name, description, price, category_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(description.is_some())
        .bind(description.flatten())
        .bind(category_id.is_some())
        .bind(category_id.flatten())
        .fetch_optional(db)
        .await
    }

    /// Deletes the row and returns its last state.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, description, price, category_id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
