use crate::domain::{ApiOutcome, ApiProvider};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::fmt;

// Path prefix every versioned endpoint lives under.
pub const API_BASE_PATH: &str = "/api/v1";

// Diagnostic prefixes, one per operation.
const CREATE_USER_CONTEXT: &str = "Error creating user";
const LOGIN_CONTEXT: &str = "Error logging in";
const USER_PROFILE_CONTEXT: &str = "Error getting user profile";
const CREATE_ITEM_CONTEXT: &str = "Error creating item";
const ROOT_CONTEXT: &str = "Error fetching api root";
const HEALTH_CONTEXT: &str = "Error checking health";
const LIST_USERS_CONTEXT: &str = "Error listing users";
const GET_USER_CONTEXT: &str = "Error getting user";
const UPDATE_USER_CONTEXT: &str = "Error updating user";
const DELETE_USER_CONTEXT: &str = "Error deleting user";
const LIST_ITEMS_CONTEXT: &str = "Error listing items";
const GET_ITEM_CONTEXT: &str = "Error getting item";
const UPDATE_ITEM_CONTEXT: &str = "Error updating item";
const DELETE_ITEM_CONTEXT: &str = "Error deleting item";

/// Thin reqwest facade over the versioned HTTP API.
///
/// Every call issues exactly one request and always decodes the body as JSON,
/// whatever the status code. Failures never escape: they are logged and
/// folded into [`ApiOutcome::Failure`].
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Debug)]
pub enum ApiClientError {
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Transport(err) => write!(f, "request failed: {err}"),
            ApiClientError::Decode(err) => write!(f, "response decode failed: {err}"),
        }
    }
}

impl std::error::Error for ApiClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiClientError::Transport(err) | ApiClientError::Decode(err) => Some(err),
        }
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    // Unversioned routes such as /health sit beside the API prefix.
    fn origin(&self) -> &str {
        self.base_url
            .strip_suffix(API_BASE_PATH)
            .unwrap_or(&self.base_url)
    }

    async fn exchange(&self, request: RequestBuilder) -> Result<Value, ApiClientError> {
        let res = request.send().await.map_err(ApiClientError::Transport)?;

        // Status is logged but not interpreted; the body is the result either way.
        tracing::debug!(status = %res.status(), url = %res.url(), "api response received.");

        res.json::<Value>().await.map_err(ApiClientError::Decode)
    }

    async fn call(&self, context: &'static str, request: RequestBuilder) -> ApiOutcome {
        normalize(context, self.exchange(request).await)
    }
}

fn normalize(context: &'static str, result: Result<Value, ApiClientError>) -> ApiOutcome {
    match result {
        Ok(body) => ApiOutcome::Success(body),
        Err(err) => {
            tracing::error!(error = %err, "{context}");
            ApiOutcome::failure(err.to_string())
        }
    }
}

#[async_trait]
impl ApiProvider for ApiClient {
    #[tracing::instrument(name = "create_user", skip_all)]
    async fn create_user(&self, user: &Value) -> ApiOutcome {
        let request = self.http.post(self.endpoint("/users/")).json(user);
        self.call(CREATE_USER_CONTEXT, request).await
    }

    #[tracing::instrument(name = "login", skip_all, fields(username = %username))]
    async fn login(&self, username: &str, password: &str) -> ApiOutcome {
        // Credentials go as form fields, not JSON.
        let request = self
            .http
            .post(self.endpoint("/auth/login"))
            .form(&[("username", username), ("password", password)]);
        self.call(LOGIN_CONTEXT, request).await
    }

    #[tracing::instrument(name = "get_user_profile", skip_all)]
    async fn get_user_profile(&self, token: &str) -> ApiOutcome {
        let request = self.http.get(self.endpoint("/users/me")).bearer_auth(token);
        self.call(USER_PROFILE_CONTEXT, request).await
    }

    #[tracing::instrument(name = "create_item", skip_all)]
    async fn create_item(&self, item: &Value, token: &str) -> ApiOutcome {
        let request = self
            .http
            .post(self.endpoint("/items/"))
            .json(item)
            .bearer_auth(token);
        self.call(CREATE_ITEM_CONTEXT, request).await
    }

    #[tracing::instrument(name = "root", skip_all)]
    async fn root(&self) -> ApiOutcome {
        let url = format!("{}/", self.origin());
        self.call(ROOT_CONTEXT, self.http.get(url)).await
    }

    #[tracing::instrument(name = "health", skip_all)]
    async fn health(&self) -> ApiOutcome {
        let url = format!("{}/health", self.origin());
        self.call(HEALTH_CONTEXT, self.http.get(url)).await
    }

    #[tracing::instrument(name = "list_users", skip_all, fields(skip = skip, limit = limit))]
    async fn list_users(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome {
        let request = self
            .http
            .get(self.endpoint("/users/"))
            .query(&[("skip", skip), ("limit", limit)])
            .bearer_auth(token);
        self.call(LIST_USERS_CONTEXT, request).await
    }

    #[tracing::instrument(name = "get_user", skip_all, fields(user_id = user_id))]
    async fn get_user(&self, user_id: u64, token: &str) -> ApiOutcome {
        let request = self
            .http
            .get(self.endpoint(&format!("/users/{user_id}")))
            .bearer_auth(token);
        self.call(GET_USER_CONTEXT, request).await
    }

    #[tracing::instrument(name = "update_user", skip_all, fields(user_id = user_id))]
    async fn update_user(&self, user_id: u64, user: &Value, token: &str) -> ApiOutcome {
        let request = self
            .http
            .put(self.endpoint(&format!("/users/{user_id}")))
            .json(user)
            .bearer_auth(token);
        self.call(UPDATE_USER_CONTEXT, request).await
    }

    #[tracing::instrument(name = "delete_user", skip_all, fields(user_id = user_id))]
    async fn delete_user(&self, user_id: u64, token: &str) -> ApiOutcome {
        let request = self
            .http
            .delete(self.endpoint(&format!("/users/{user_id}")))
            .bearer_auth(token);
        self.call(DELETE_USER_CONTEXT, request).await
    }

    #[tracing::instrument(name = "list_items", skip_all, fields(skip = skip, limit = limit))]
    async fn list_items(&self, token: &str, skip: u32, limit: u32) -> ApiOutcome {
        let request = self
            .http
            .get(self.endpoint("/items/"))
            .query(&[("skip", skip), ("limit", limit)])
            .bearer_auth(token);
        self.call(LIST_ITEMS_CONTEXT, request).await
    }

    #[tracing::instrument(name = "get_item", skip_all, fields(item_id = item_id))]
    async fn get_item(&self, item_id: u64, token: &str) -> ApiOutcome {
        let request = self
            .http
            .get(self.endpoint(&format!("/items/{item_id}")))
            .bearer_auth(token);
        self.call(GET_ITEM_CONTEXT, request).await
    }

    #[tracing::instrument(name = "update_item", skip_all, fields(item_id = item_id))]
    async fn update_item(&self, item_id: u64, item: &Value, token: &str) -> ApiOutcome {
        let request = self
            .http
            .put(self.endpoint(&format!("/items/{item_id}")))
            .json(item)
            .bearer_auth(token);
        self.call(UPDATE_ITEM_CONTEXT, request).await
    }

    #[tracing::instrument(name = "delete_item", skip_all, fields(item_id = item_id))]
    async fn delete_item(&self, item_id: u64, token: &str) -> ApiOutcome {
        let request = self
            .http
            .delete(self.endpoint(&format!("/items/{item_id}")))
            .bearer_auth(token);
        self.call(DELETE_ITEM_CONTEXT, request).await
    }
}
