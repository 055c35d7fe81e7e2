pub mod sign_in;

#[cfg(test)]
pub(crate) mod test_support;

pub use sign_in::{SignInError, SignInResponse, SignInUseCase};
