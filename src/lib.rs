pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{ApiOutcome, ApiProvider, ErrorDescriptor};
pub use frameworks::runtime::{RunError, run, smoke_run};
pub use interface_adapters::clients::{API_BASE_PATH, ApiClient, ApiClientError};
