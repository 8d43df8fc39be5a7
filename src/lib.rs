pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::shop_service::{ShopError, ShopService, WritePolicy};
pub use domain::{ShopDraft, ShopFields, ShopId, ShopRecord, ValidationError};
pub use infra::config::Config;
pub use storage::{InMemoryShopStore, PostgresShopStore, ShopStore, StoreError};
