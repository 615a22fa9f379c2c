use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::CheckConfig;
use crate::utils::error::Result;

/// 可選的 TOML 配置檔，覆寫預設的項目 / 模組標識與檔名。
/// 所有欄位都是可選的，缺省時沿用 `CheckConfig` 的預設值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project_id: Option<String>,
    pub mod_id: Option<String>,
    pub registry_file: Option<String>,
    pub report_file: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 將覆寫套用到基礎配置上
    pub fn apply(self, base: CheckConfig) -> CheckConfig {
        CheckConfig {
            base_dir: base.base_dir,
            project_id: self.project_id.unwrap_or(base.project_id),
            mod_id: self.mod_id.unwrap_or(base.mod_id),
            registry_file: self.registry_file.unwrap_or(base.registry_file),
            report_file: self.report_file.unwrap_or(base.report_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            project_id = "mypack"
            mod_id = "mymod"
            registry_file = "ids.json"
            report_file = "report.md"
        "#;
        let parsed = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(parsed.project_id.as_deref(), Some("mypack"));
        assert_eq!(parsed.mod_id.as_deref(), Some("mymod"));
        assert_eq!(parsed.registry_file.as_deref(), Some("ids.json"));
        assert_eq!(parsed.report_file.as_deref(), Some("report.md"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let parsed = TomlConfig::from_toml_str("mod_id = \"mymod\"").unwrap();
        let config = parsed.apply(CheckConfig::new("."));
        assert_eq!(config.mod_id, "mymod");
        assert_eq!(config.project_id, crate::config::DEFAULT_PROJECT_ID);
        assert_eq!(config.registry_file, crate::config::DEFAULT_REGISTRY_FILE);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TomlConfig::from_toml_str("mod_id = [not toml").is_err());
    }
}
