//! In-memory shop store.
//!
//! Mirrors the table's behavior closely enough to run the service without a
//! database: ids come from a monotonically increasing sequence that is never
//! reused, and NULL writes into the three text columns are refused.

use super::{ShopStore, StoreError};
use crate::domain::{ShopDraft, ShopFields, ShopId, ShopRecord};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    rows: BTreeMap<ShopId, ShopRecord>,
    last_id: i32,
}

#[derive(Clone, Default)]
pub struct InMemoryShopStore {
    table: Arc<Mutex<Table>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store is offline".to_string()));
        }
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

fn not_null(value: &Option<String>, column: &str) -> Result<String, StoreError> {
    value.clone().ok_or_else(|| {
        StoreError::Constraint(format!(
            "null value in column \"{column}\" of relation \"florerias\" violates not-null constraint"
        ))
    })
}

#[async_trait]
impl ShopStore for InMemoryShopStore {
    async fn list(&self) -> Result<Vec<ShopRecord>, StoreError> {
        Ok(self.table()?.rows.values().cloned().collect())
    }

    async fn find(&self, id: ShopId) -> Result<Option<ShopRecord>, StoreError> {
        Ok(self.table()?.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: &ShopFields) -> Result<ShopId, StoreError> {
        let mut table = self.table()?;
        table.last_id += 1;
        let id = ShopId::new(table.last_id);
        table.rows.insert(id, ShopRecord::new(id, fields.clone()));
        Ok(id)
    }

    async fn update(&self, id: ShopId, draft: &ShopDraft) -> Result<u64, StoreError> {
        let mut table = self.table()?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(0);
        };
        let name = not_null(&draft.name, "nombre")?;
        let location = not_null(&draft.location, "ubicacion")?;
        let phone = not_null(&draft.phone, "telefono")?;
        row.name = name;
        row.location = location;
        row.phone = phone;
        Ok(1)
    }

    async fn delete(&self, id: ShopId) -> Result<u64, StoreError> {
        Ok(self.table()?.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.table().map(|_| ())
    }
}
