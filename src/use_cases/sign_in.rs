use crate::domain::{ApiOutcome, ApiProvider, ErrorDescriptor};
use serde_json::Value;
use std::fmt;

// Profile fetched with the token issued by a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInResponse {
    pub access_token: String,
    pub profile: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignInError {
    LoginRejected(ErrorDescriptor),
    // Login answered with JSON that carries no usable `access_token`.
    MissingToken(Value),
    ProfileRejected(ErrorDescriptor),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::LoginRejected(descriptor) => {
                write!(f, "login failed: {}", descriptor.error)
            }
            SignInError::MissingToken(_) => write!(f, "login response has no access token"),
            SignInError::ProfileRejected(descriptor) => {
                write!(f, "profile fetch failed: {}", descriptor.error)
            }
        }
    }
}

impl std::error::Error for SignInError {}

// Login followed by a profile lookup, with the provider injected.
pub struct SignInUseCase<P> {
    pub api: P,
}

impl<P> SignInUseCase<P>
where
    P: ApiProvider,
{
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SignInResponse, SignInError> {
        let login_body = match self.api.login(username, password).await {
            ApiOutcome::Success(body) => body,
            ApiOutcome::Failure(descriptor) => return Err(SignInError::LoginRejected(descriptor)),
        };

        let access_token = match login_body.get("access_token").and_then(Value::as_str) {
            Some(token) => token.to_string(),
            None => return Err(SignInError::MissingToken(login_body)),
        };

        match self.api.get_user_profile(&access_token).await {
            ApiOutcome::Success(profile) => Ok(SignInResponse {
                access_token,
                profile,
            }),
            ApiOutcome::Failure(descriptor) => Err(SignInError::ProfileRejected(descriptor)),
        }
    }
}
