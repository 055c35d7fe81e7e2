// Framework bootstrap for the smoke-run binary.

use crate::domain::{ApiOutcome, ApiProvider};
use crate::frameworks::config::{self, ConfigError};
use crate::interface_adapters::clients::ApiClient;
use crate::use_cases::{SignInError, SignInUseCase};
use std::fmt;
use std::sync::Arc;

// Each variant has already been logged by the time it is returned.
#[derive(Debug)]
pub enum RunError {
    Config(ConfigError),
    Unhealthy(String),
    SignIn(SignInError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Config(err) => write!(f, "configuration error: {err}"),
            RunError::Unhealthy(message) => write!(f, "api health check failed: {message}"),
            RunError::SignIn(err) => write!(f, "sign in failed: {err}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::Config(err)
    }
}

pub fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> Result<(), RunError> {
    init_runtime();

    let base_url = config::api_base_url().inspect_err(|e| {
        tracing::error!(error = %e, "failed to read api configuration");
    })?;
    tracing::debug!(base_url = %base_url, "api client configured.");
    let api: Arc<dyn ApiProvider> = Arc::new(ApiClient::new(base_url));

    smoke_run(api, config::credentials()).await
}

// Health check, then a sign-in when credentials are supplied.
pub async fn smoke_run(
    api: Arc<dyn ApiProvider>,
    credentials: Option<(String, String)>,
) -> Result<(), RunError> {
    match api.health().await {
        ApiOutcome::Success(body) => tracing::info!(%body, "api health checked."),
        // Already logged by the client.
        ApiOutcome::Failure(descriptor) => return Err(RunError::Unhealthy(descriptor.error)),
    }

    let Some((username, password)) = credentials else {
        tracing::info!("API_USERNAME/API_PASSWORD not set, skipping sign in.");
        return Ok(());
    };

    let use_case = SignInUseCase { api };
    let result = use_case
        .execute(&username, &password)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "sign in failed."))
        .map_err(RunError::SignIn)?;
    tracing::info!(profile = %result.profile, "signed in.");

    Ok(())
}
