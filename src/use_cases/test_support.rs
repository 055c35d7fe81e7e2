use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ApiOutcome, ApiProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    Login { username: String, password: String },
    GetUserProfile { token: String },
    Other(&'static str),
}

// Provider with canned outcomes that records every call it receives.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    login: ApiOutcome,
    profile: ApiOutcome,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            login: ApiOutcome::failure("login not scripted"),
            profile: ApiOutcome::failure("profile not scripted"),
        }
    }

    pub(crate) fn with_login(mut self, outcome: ApiOutcome) -> Self {
        self.login = outcome;
        self
    }

    pub(crate) fn with_profile(mut self, outcome: ApiOutcome) -> Self {
        self.profile = outcome;
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }

    fn unscripted(&self, name: &'static str) -> ApiOutcome {
        self.record(RecordedCall::Other(name));
        ApiOutcome::failure(format!("{name} not scripted"))
    }
}

#[async_trait]
impl ApiProvider for ScriptedProvider {
    async fn create_user(&self, _user: &Value) -> ApiOutcome {
        self.unscripted("create_user")
    }

    async fn login(&self, username: &str, password: &str) -> ApiOutcome {
        self.record(RecordedCall::Login {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.login.clone()
    }

    async fn get_user_profile(&self, token: &str) -> ApiOutcome {
        self.record(RecordedCall::GetUserProfile {
            token: token.to_string(),
        });
        self.profile.clone()
    }

    async fn create_item(&self, _item: &Value, _token: &str) -> ApiOutcome {
        self.unscripted("create_item")
    }

    async fn root(&self) -> ApiOutcome {
        self.unscripted("root")
    }

    async fn health(&self) -> ApiOutcome {
        self.unscripted("health")
    }

    async fn list_users(&self, _token: &str, _skip: u32, _limit: u32) -> ApiOutcome {
        self.unscripted("list_users")
    }

    async fn get_user(&self, _user_id: u64, _token: &str) -> ApiOutcome {
        self.unscripted("get_user")
    }

    async fn update_user(&self, _user_id: u64, _user: &Value, _token: &str) -> ApiOutcome {
        self.unscripted("update_user")
    }

    async fn delete_user(&self, _user_id: u64, _token: &str) -> ApiOutcome {
        self.unscripted("delete_user")
    }

    async fn list_items(&self, _token: &str, _skip: u32, _limit: u32) -> ApiOutcome {
        self.unscripted("list_items")
    }

    async fn get_item(&self, _item_id: u64, _token: &str) -> ApiOutcome {
        self.unscripted("get_item")
    }

    async fn update_item(&self, _item_id: u64, _item: &Value, _token: &str) -> ApiOutcome {
        self.unscripted("update_item")
    }

    async fn delete_item(&self, _item_id: u64, _token: &str) -> ApiOutcome {
        self.unscripted("delete_item")
    }
}
