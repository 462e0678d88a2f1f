//! User service client module for HTTP communication

mod client;
mod traits;
mod types;

pub use client::{UserServiceClient, DEFAULT_API_BASE_URL};
pub use traits::UserService;
pub use types::{CreateUserRequest, SubmitError};

#[cfg(test)]
pub use traits::MockUserService;
#[cfg(test)]
pub use types::GENERIC_SUBMIT_ERROR;
