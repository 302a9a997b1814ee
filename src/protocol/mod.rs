//! Core A2A protocol types and definitions

pub(crate) mod de;
pub mod error;
pub mod message;
pub mod task;

pub use error::{BridgeError, BridgeResult, TaskError, ValidationError};
pub use message::{Message, Part, Role, TEXT_PART};
pub use task::{CorrelationContext, TaskRequest, TaskState, TaskStatus, TaskStatusResponse};
