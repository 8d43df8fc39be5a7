pub mod openapi;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod shops;
}

pub use openapi::ApiDoc;
pub use router::{build_app, create_router};
pub use types::AppState;
