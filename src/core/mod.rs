pub mod api;
pub mod block;
pub mod emitter;
pub mod engine;
pub mod path;
pub mod registry;

pub use crate::domain::model::{AppConfig, BlockInvocation, BlockOutcome};
pub use crate::domain::ports::{ConfigProvider, EventEmitter};
pub use crate::utils::error::Result;
