//! Bridge assembly: configuration, builder and the high-level handle

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::{BoxBridgeService, BridgeBuilder};
pub use config::BridgeConfig;
pub use handle::Bridge;
