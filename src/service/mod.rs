//! Tower Service implementations

pub mod core;
pub mod request;

pub use core::BridgeService;
pub use request::{BridgeRequest, RequestContext};
