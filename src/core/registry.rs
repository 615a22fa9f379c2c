use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use crate::utils::error::{CheckError, Result};

/// 读取 block_id.json 的方块名集合。
/// 值形如 "box3:grass" 时去掉 "<mod_id>:" 前缀，方便和文件名对齐；
/// 其余值原样保留。重复值按集合语义去重。
pub fn load_identifiers(path: &Path, mod_id: &str) -> Result<BTreeSet<String>> {
    if !path.is_file() {
        return Err(CheckError::RegistryMissingError {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let data: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;

    let prefix = format!("{}:", mod_id);
    let mut names = BTreeSet::new();
    for value in data.values() {
        match value {
            serde_json::Value::String(name) => {
                names.insert(name.strip_prefix(&prefix).unwrap_or(name).to_string());
            }
            other => {
                names.insert(other.to_string());
            }
        }
    }

    tracing::debug!("loaded {} identifiers from {}", names.len(), path.display());
    Ok(names)
}
