pub mod engine;
pub mod index;
pub mod matcher;
pub mod pipeline;
pub mod registry;
pub mod report;

pub use crate::domain::model::{CategoryCheck, CheckResult, ScanData};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
