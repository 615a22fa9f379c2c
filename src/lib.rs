pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::CliConfig, toml_config::TomlConfig, CheckConfig};
pub use core::{engine::CheckEngine, pipeline::CheckPipeline};
pub use domain::model::{CategoryCheck, CheckResult, ScanData};
pub use domain::ports::Pipeline;
pub use utils::error::{CheckError, Result};
