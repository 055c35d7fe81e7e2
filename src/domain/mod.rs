mod api;

// Re-export the domain boundary types and ports.
pub use api::{ApiOutcome, ApiProvider, ErrorDescriptor};
