#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod resolve;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
#[cfg(feature = "cli")]
pub use resolve::{resolve, ActiveConfig, RunPlan};
pub use toml_config::ProjectorConfig;
