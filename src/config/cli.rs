use std::path::PathBuf;

use clap::Parser;

use crate::config::{toml_config::TomlConfig, CheckConfig};
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "block-check")]
#[command(about = "Checks datapack recipe and loot_table coverage against block_id.json")]
pub struct CliConfig {
    /// Datapack root containing block_id.json (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Optional TOML file overriding project/mod ids and file names
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併 CLI 參數與可選的 TOML 覆寫，得到最終配置
    pub fn resolve(&self) -> Result<CheckConfig> {
        let defaults = CheckConfig::new(self.base_dir.clone());
        match &self.config {
            Some(path) => Ok(TomlConfig::from_file(path)?.apply(defaults)),
            None => Ok(defaults),
        }
    }
}
