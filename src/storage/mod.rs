pub mod shop;

pub use shop::{InMemoryShopStore, PostgresShopStore, ShopStore, StoreError};
