//! PostgreSQL lodging store
//!
//! Single-statement operations against a `lodgings` table with a
//! BIGSERIAL primary key, so deleted ids are never handed out again.
//! Schema setup is idempotent and runs at startup.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{LodgingStore, StoreError};
use crate::models::{Lodging, NewLodging};

/// Default maximum connections for the pool
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the lodgings table and owner index if they don't exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        tracing::info!("Ensuring lodgings schema...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lodgings (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                owner_id BIGINT NOT NULL,
                description TEXT NOT NULL,
                street TEXT,
                city TEXT,
                state TEXT,
                zip TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Owner listing is a full equality scan without this
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS lodgings_owner_id_idx ON lodgings (owner_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LodgingStore for PgStore {
    async fn count(&self) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lodgings")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Lodging>, StoreError> {
        let lodgings = sqlx::query_as::<_, Lodging>(
            r#"
            SELECT id, name, price, owner_id, description, street, city, state, zip
            FROM lodgings
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(lodgings)
    }

    async fn get(&self, id: i64) -> Result<Option<Lodging>, StoreError> {
        let lodging = sqlx::query_as::<_, Lodging>(
            r#"
            SELECT id, name, price, owner_id, description, street, city, state, zip
            FROM lodgings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(lodging)
    }

    async fn insert(&self, new: NewLodging) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO lodgings (name, price, owner_id, description, street, city, state, zip)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(new.owner_id)
        .bind(&new.description)
        .bind(new.street.as_deref())
        .bind(new.city.as_deref())
        .bind(new.state.as_deref())
        .bind(new.zip.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    async fn replace(&self, id: i64, new: NewLodging) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE lodgings
            SET name = $2, price = $3, owner_id = $4, description = $5,
                street = $6, city = $7, state = $8, zip = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.price)
        .bind(new.owner_id)
        .bind(&new.description)
        .bind(new.street.as_deref())
        .bind(new.city.as_deref())
        .bind(new.state.as_deref())
        .bind(new.zip.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM lodgings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Lodging>, StoreError> {
        let lodgings = sqlx::query_as::<_, Lodging>(
            r#"
            SELECT id, name, price, owner_id, description, street, city, state, zip
            FROM lodgings
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lodgings)
    }
}
