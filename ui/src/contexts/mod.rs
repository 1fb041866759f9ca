pub mod api;

pub use api::{ApiHandle, ApiProvider, use_api};
