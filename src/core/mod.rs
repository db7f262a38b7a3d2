pub mod generator;
pub mod instructions;
pub mod templates;

pub use crate::domain::model::{HealthStatus, SetupReport, Template, WriteStatus, WrittenFile};
pub use crate::domain::ports::{ConfigProvider, HealthCheck, Storage};
pub use crate::utils::error::Result;
