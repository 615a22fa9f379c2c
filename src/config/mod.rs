pub mod cli;
pub mod toml_config;

use std::path::PathBuf;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_PROJECT_ID: &str = "box3formula";
pub const DEFAULT_MOD_ID: &str = "box3";
pub const DEFAULT_REGISTRY_FILE: &str = "block_id.json";
pub const DEFAULT_REPORT_FILE: &str = "block_check_report.md";

/// 检查任务的完整配置：基准目录 + 项目 / 模组标识 + 输入输出文件名。
/// 所有扫描路径都由这里推导，便于在测试中指向临时目录。
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub base_dir: PathBuf,
    pub project_id: String,
    pub mod_id: String,
    pub registry_file: String,
    pub report_file: String,
}

impl CheckConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            mod_id: DEFAULT_MOD_ID.to_string(),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
        }
    }

    pub fn registry_path(&self) -> PathBuf {
        self.base_dir.join(&self.registry_file)
    }

    /// `<project>/data/<mod>/recipe/`
    pub fn recipe_dir(&self) -> PathBuf {
        self.base_dir
            .join(&self.project_id)
            .join("data")
            .join(&self.mod_id)
            .join("recipe")
    }

    /// `<project>/data/<mod>/loot_table/blocks/`
    pub fn loot_dir(&self) -> PathBuf {
        self.base_dir
            .join(&self.project_id)
            .join("data")
            .join(&self.mod_id)
            .join("loot_table")
            .join("blocks")
    }

    pub fn report_path(&self) -> PathBuf {
        self.base_dir.join(&self.report_file)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_dir", &self.base_dir.to_string_lossy())?;
        validation::validate_non_empty_string("project_id", &self.project_id)?;
        validation::validate_non_empty_string("mod_id", &self.mod_id)?;
        validation::validate_file_name("registry_file", &self.registry_file)?;
        validation::validate_file_name("report_file", &self.report_file)?;
        Ok(())
    }
}
