use crate::domain::model::{CheckResult, ScanData};
use crate::utils::error::Result;

pub trait Pipeline {
    fn extract(&self) -> Result<ScanData>;
    fn transform(&self, data: ScanData) -> Result<CheckResult>;
    fn load(&self, result: CheckResult) -> Result<String>;
}
