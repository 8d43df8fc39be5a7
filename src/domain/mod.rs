pub mod shop;

pub use shop::{ShopDraft, ShopFields, ShopId, ShopRecord, ValidationError};
