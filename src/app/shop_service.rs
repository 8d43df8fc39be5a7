//! The Shop Catalog Service.
//!
//! Sits between the HTTP handlers and the store. Every operation issues exactly
//! one store call; there are no transactions, retries or in-process locks.

use crate::domain::{ShopDraft, ShopId, ShopRecord, ValidationError};
use crate::storage::{ShopStore, StoreError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// How Update and Delete treat incomplete payloads and absent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Update skips presence validation, and writes that match no row still
    /// succeed.
    #[default]
    Permissive,
    /// Update validates like Create, and Update/Delete of an absent id is
    /// `ShopError::NotFound`.
    Strict,
}

/// The catalog operation a store failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Health,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Health => "health",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("floreria {0} not found")]
    NotFound(ShopId),
    #[error("{operation} failed: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: StoreError,
    },
}

fn store_error(operation: Operation) -> impl FnOnce(StoreError) -> ShopError {
    move |source| {
        error!(%operation, error = %source, "store call failed");
        ShopError::Store { operation, source }
    }
}

pub struct ShopService {
    store: Arc<dyn ShopStore>,
    policy: WritePolicy,
}

impl ShopService {
    pub fn new(store: Arc<dyn ShopStore>, policy: WritePolicy) -> Self {
        Self { store, policy }
    }

    pub async fn list(&self) -> Result<Vec<ShopRecord>, ShopError> {
        self.store.list().await.map_err(store_error(Operation::List))
    }

    /// Absent ids yield `Ok(None)` under both policies.
    pub async fn get(&self, id: ShopId) -> Result<Option<ShopRecord>, ShopError> {
        self.store.find(id).await.map_err(store_error(Operation::Get))
    }

    /// Validates the draft and inserts it, returning the id the store assigned.
    pub async fn create(&self, draft: ShopDraft) -> Result<ShopId, ShopError> {
        let fields = draft.validate().inspect_err(|e| {
            warn!(error = %e, "rejected incomplete floreria");
        })?;
        let id = self
            .store
            .insert(&fields)
            .await
            .map_err(store_error(Operation::Create))?;
        info!(%id, "floreria created");
        Ok(id)
    }

    /// Overwrites all three fields of `id`. Returns the rows affected.
    pub async fn update(&self, id: ShopId, draft: ShopDraft) -> Result<u64, ShopError> {
        let draft = match self.policy {
            WritePolicy::Permissive => draft,
            WritePolicy::Strict => draft.validate()?.into(),
        };
        let affected = self
            .store
            .update(id, &draft)
            .await
            .map_err(store_error(Operation::Update))?;
        self.check_affected(id, affected)?;
        info!(%id, affected, "floreria updated");
        Ok(affected)
    }

    /// Hard-deletes `id`. Returns the rows affected.
    pub async fn delete(&self, id: ShopId) -> Result<u64, ShopError> {
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(store_error(Operation::Delete))?;
        self.check_affected(id, affected)?;
        info!(%id, affected, "floreria deleted");
        Ok(affected)
    }

    pub async fn health(&self) -> Result<(), ShopError> {
        self.store.ping().await.map_err(store_error(Operation::Health))
    }

    fn check_affected(&self, id: ShopId, affected: u64) -> Result<(), ShopError> {
        if affected == 0 && self.policy == WritePolicy::Strict {
            return Err(ShopError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryShopStore;

    fn draft(name: &str, location: &str, phone: &str) -> ShopDraft {
        ShopDraft {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    fn service(policy: WritePolicy) -> (ShopService, InMemoryShopStore) {
        let store = InMemoryShopStore::new();
        (ShopService::new(Arc::new(store.clone()), policy), store)
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_fields() {
        let (service, _) = service(WritePolicy::Permissive);
        let id = service
            .create(draft("El girasol de Benja", "Av 125", "1222345"))
            .await
            .unwrap();

        let record = service.get(id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.name, "El girasol de Benja");
        assert_eq!(record.location, "Av 125");
        assert_eq!(record.phone, "1222345");
    }

    #[tokio::test]
    async fn incomplete_create_persists_nothing() {
        let (service, _) = service(WritePolicy::Permissive);
        let err = service.create(draft("Rosa", "Centro", "")).await.unwrap_err();

        assert!(matches!(
            err,
            ShopError::Validation(ValidationError::MissingFields(ref f)) if f == &vec!["telefono"]
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let (service, _) = service(WritePolicy::Permissive);
        let id = service.create(draft("a", "b", "c")).await.unwrap();

        let affected = service.update(id, draft("x", "y", "z")).await.unwrap();
        assert_eq!(affected, 1);

        let record = service.get(id).await.unwrap().unwrap();
        assert_eq!((record.name.as_str(), record.location.as_str(), record.phone.as_str()), ("x", "y", "z"));
    }

    #[tokio::test]
    async fn permissive_policy_accepts_absent_ids() {
        let (service, _) = service(WritePolicy::Permissive);
        let missing = ShopId::new(404);

        assert_eq!(service.update(missing, draft("x", "y", "z")).await.unwrap(), 0);
        assert_eq!(service.delete(missing).await.unwrap(), 0);
        assert_eq!(service.get(missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn permissive_update_lets_the_store_reject_nulls() {
        let (service, _) = service(WritePolicy::Permissive);
        let id = service.create(draft("a", "b", "c")).await.unwrap();

        let err = service.update(id, ShopDraft::default()).await.unwrap_err();
        assert!(matches!(
            err,
            ShopError::Store { operation: Operation::Update, source: StoreError::Constraint(_) }
        ));
    }

    #[tokio::test]
    async fn strict_policy_validates_updates_and_reports_absent_ids() {
        let (service, _) = service(WritePolicy::Strict);
        let id = service.create(draft("a", "b", "c")).await.unwrap();

        let err = service.update(id, draft("x", "", "z")).await.unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));

        let missing = ShopId::new(404);
        assert!(matches!(
            service.update(missing, draft("x", "y", "z")).await,
            Err(ShopError::NotFound(m)) if m == missing
        ));
        assert!(matches!(service.delete(missing).await, Err(ShopError::NotFound(_))));
        assert_eq!(service.delete(id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn store_failures_carry_the_operation() {
        let (service, store) = service(WritePolicy::Permissive);
        store.set_offline(true);

        assert!(matches!(
            service.list().await,
            Err(ShopError::Store { operation: Operation::List, .. })
        ));
        assert!(matches!(
            service.delete(ShopId::new(1)).await,
            Err(ShopError::Store { operation: Operation::Delete, .. })
        ));
        assert!(service.health().await.is_err());
    }
}
