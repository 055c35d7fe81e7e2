use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

// Normalized failure payload handed back to callers: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub error: String,
}

impl ErrorDescriptor {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Result of a single API exchange.
///
/// `Success` holds the decoded response body exactly as the server sent it,
/// whatever the HTTP status was. `Failure` covers transport faults and bodies
/// that were not JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success(Value),
    Failure(ErrorDescriptor),
}

impl ApiOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiOutcome::Failure(ErrorDescriptor::new(message))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApiOutcome::Failure(_))
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiOutcome::Success(body) => Some(body),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(descriptor) => Some(descriptor.error.as_str()),
        }
    }

    /// Flattens the outcome into plain JSON: the body, or `{"error": message}`.
    pub fn into_json(self) -> Value {
        match self {
            ApiOutcome::Success(body) => body,
            ApiOutcome::Failure(descriptor) => serde_json::json!({ "error": descriptor.error }),
        }
    }
}

// Consumers depend on this trait, not on the reqwest-backed client.
#[async_trait]
pub trait ApiProvider: Send + Sync {
    async fn create_user(&self, user: &Value) -> ApiOutcome;

    async fn login(&self, username: &str, password: &str) -> ApiOutcome;

    async fn get_user_profile(&self, token: &str) -> ApiOutcome;

    async fn create_item(&self, item: &Value, token: &str) -> ApiOutcome;

    async fn root(&self) -> ApiOutcome;

    async fn health(&self) -> ApiOutcome;

    async fn list_users(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome;

    async fn get_user(&self, user_id: u64, token: &str) -> ApiOutcome;

    async fn update_user(&self, user_id: u64, user: &Value, token: &str) -> ApiOutcome;

    async fn delete_user(&self, user_id: u64, token: &str) -> ApiOutcome;

    async fn list_items(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome;

    async fn get_item(&self, item_id: u64, token: &str) -> ApiOutcome;

    async fn update_item(&self, item_id: u64, item: &Value, token: &str) -> ApiOutcome;

    async fn delete_item(&self, item_id: u64, token: &str) -> ApiOutcome;
}

// Lets use cases hold a shared `Arc<dyn ApiProvider>`.
#[async_trait]
impl<T: ApiProvider + ?Sized> ApiProvider for Arc<T> {
    async fn create_user(&self, user: &Value) -> ApiOutcome {
        (**self).create_user(user).await
    }

    async fn login(&self, username: &str, password: &str) -> ApiOutcome {
        (**self).login(username, password).await
    }

    async fn get_user_profile(&self, token: &str) -> ApiOutcome {
        (**self).get_user_profile(token).await
    }

    async fn create_item(&self, item: &Value, token: &str) -> ApiOutcome {
        (**self).create_item(item, token).await
    }

    async fn root(&self) -> ApiOutcome {
        (**self).root().await
    }

    async fn health(&self) -> ApiOutcome {
        (**self).health().await
    }

    async fn list_users(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome {
        (**self).list_users(token, skip, limit).await
    }

    async fn get_user(&self, user_id: u64, token: &str) -> ApiOutcome {
        (**self).get_user(user_id, token).await
    }

    async fn update_user(&self, user_id: u64, user: &Value, token: &str) -> ApiOutcome {
        (**self).update_user(user_id, user, token).await
    }

    async fn delete_user(&self, user_id: u64, token: &str) -> ApiOutcome {
        (**self).delete_user(user_id, token).await
    }

    async fn list_items(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome {
        (**self).list_items(token, skip, limit).await
    }

    async fn get_item(&self, item_id: u64, token: &str) -> ApiOutcome {
        (**self).get_item(item_id, token).await
    }

    async fn update_item(&self, item_id: u64, item: &Value, token: &str) -> ApiOutcome {
        (**self).update_item(item_id, item, token).await
    }

    async fn delete_item(&self, item_id: u64, token: &str) -> ApiOutcome {
        (**self).delete_item(item_id, token).await
    }
}
