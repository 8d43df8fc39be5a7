//! Persistence capability for shop records.

use crate::domain::{ShopDraft, ShopFields, ShopId, ShopRecord};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryShopStore;
pub use postgres::PostgresShopStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Query execution failed (connectivity, bad SQL, other driver errors).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A write was refused by a table constraint (NOT NULL).
    #[error("constraint violated: {0}")]
    Constraint(String),
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One method per catalog operation; each maps to exactly one statement.
///
/// No method opens a transaction or retries. Implementations must be safe to
/// share across concurrently running requests.
#[async_trait]
pub trait ShopStore: Send + Sync {
    /// All rows, in the store's natural order.
    async fn list(&self) -> Result<Vec<ShopRecord>, StoreError>;

    async fn find(&self, id: ShopId) -> Result<Option<ShopRecord>, StoreError>;

    /// Inserts a row and returns the id the store assigned to it.
    async fn insert(&self, fields: &ShopFields) -> Result<ShopId, StoreError>;

    /// Overwrites all three columns of the row with `id`.
    ///
    /// Absent draft fields are written as NULL, which the table rejects.
    /// Returns the number of rows affected (0 when no row matched).
    async fn update(&self, id: ShopId, draft: &ShopDraft) -> Result<u64, StoreError>;

    /// Hard-deletes the row with `id`. Returns the number of rows affected.
    async fn delete(&self, id: ShopId) -> Result<u64, StoreError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), StoreError>;
}
