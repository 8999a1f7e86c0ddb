pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use http::build_router;
pub use store::AppState;
