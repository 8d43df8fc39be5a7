//! Shop store implementation using PostgreSQL.

use super::{ShopStore, StoreError};
use crate::domain::{ShopDraft, ShopFields, ShopId, ShopRecord};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS florerias (
    idfloreria SERIAL PRIMARY KEY,
    nombre TEXT NOT NULL,
    ubicacion TEXT NOT NULL,
    telefono TEXT NOT NULL
)";

/// A shop store backed by a PostgreSQL connection pool.
///
/// The pool is the single process-wide store resource; cloning the store
/// clones the pool handle, not the connections.
#[derive(Clone)]
pub struct PostgresShopStore {
    pool: PgPool,
}

impl PostgresShopStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool to `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `florerias` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Whether the `florerias` table is present in the current schema.
    pub async fn table_exists(&self) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT to_regclass('florerias') IS NOT NULL AS present")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("present")?)
    }
}

/// SQLSTATE for `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";

/// Reports NOT NULL refusals as `StoreError::Constraint`, like the in-memory store.
fn classify_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some(NOT_NULL_VIOLATION) {
            return StoreError::Constraint(db.message().to_string());
        }
    }
    StoreError::Database(err)
}

fn record_from_row(row: &PgRow) -> Result<ShopRecord, StoreError> {
    Ok(ShopRecord {
        id: ShopId::new(row.try_get("idfloreria")?),
        name: row.try_get("nombre")?,
        location: row.try_get("ubicacion")?,
        phone: row.try_get("telefono")?,
    })
}

#[async_trait]
impl ShopStore for PostgresShopStore {
    async fn list(&self) -> Result<Vec<ShopRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT idfloreria, nombre, ubicacion, telefono FROM florerias ORDER BY idfloreria",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(record_from_row).collect()
    }

    async fn find(&self, id: ShopId) -> Result<Option<ShopRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT idfloreria, nombre, ubicacion, telefono FROM florerias WHERE idfloreria = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(record_from_row).transpose()
    }

    async fn insert(&self, fields: &ShopFields) -> Result<ShopId, StoreError> {
        let row = sqlx::query(
            "INSERT INTO florerias (nombre, ubicacion, telefono) VALUES ($1, $2, $3)
             RETURNING idfloreria",
        )
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(&fields.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_write_error)?;
        Ok(ShopId::new(row.try_get("idfloreria")?))
    }

    async fn update(&self, id: ShopId, draft: &ShopDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE florerias SET nombre = $1, ubicacion = $2, telefono = $3
             WHERE idfloreria = $4",
        )
        .bind(draft.name.as_deref())
        .bind(draft.location.as_deref())
        .bind(draft.phone.as_deref())
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(classify_write_error)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ShopId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM florerias WHERE idfloreria = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_database_errors() {
        let err = classify_write_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }
}
