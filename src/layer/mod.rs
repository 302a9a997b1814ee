//! Tower Layer implementations for the bridge

pub mod auth;
pub mod validation;

pub use auth::{AuthCredentials, AuthLayer, AuthService, AZURE_API_KEY_HEADER};
pub use validation::{ValidationLayer, ValidationService};
