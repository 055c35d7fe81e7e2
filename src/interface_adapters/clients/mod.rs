// Clients for reqwest calls to external services.
pub mod api;

pub use api::{API_BASE_PATH, ApiClient, ApiClientError};
