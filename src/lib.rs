#![recursion_limit = "256"]

pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;
pub use config::{Settings, TomlConfig};

pub use core::api::{filter_defined_params, LaunchDarklyClient, NullPolicy};
pub use core::block::BlockDefinition;
pub use core::emitter::{LogEmitter, MemoryEmitter, StdoutEmitter};
pub use core::engine::BlockEngine;
pub use core::registry::BlockRegistry;
pub use domain::model::{AppConfig, AppContext, BlockInvocation, BlockOutcome};
pub use domain::ports::{ConfigProvider, EventEmitter};
pub use utils::error::{BlockError, Result};
