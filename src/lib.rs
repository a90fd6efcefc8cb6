pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ProjectorConfig;

pub use core::{etl::EtlEngine, pipeline::ProjectionPipeline};
pub use domain::model::{ProjectionResult, Record};
pub use utils::error::{ProjectorError, Result};
