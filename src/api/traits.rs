//! Trait abstraction for the user service to enable mocking in tests

use super::types::{CreateUserRequest, SubmitError};
use async_trait::async_trait;

/// Operations the registration view needs from the remote user service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a customer account. `Ok` for any 2xx response.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), SubmitError>;
}
