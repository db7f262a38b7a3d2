pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpHealthCheck, LocalStorage};
pub use crate::config::SetupConfig;
pub use crate::core::{generator::SetupGenerator, HealthStatus, SetupReport};
pub use crate::utils::error::{Result, SetupError};
