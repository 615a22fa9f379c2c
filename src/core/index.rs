use std::collections::BTreeSet;
use std::path::Path;

use crate::utils::error::Result;

/// 列出目录下（不递归）所有 .json 文件的文件名（去掉扩展名）。
/// 目录不存在时只给出警告并返回空集合，后续逻辑按“没有文件”处理。
pub fn list_json_basenames(dir: &Path) -> Result<BTreeSet<String>> {
    if !dir.is_dir() {
        tracing::warn!("scan directory does not exist: {}", dir.display());
        println!("[警告] 目录不存在: {}", dir.display());
        return Ok(BTreeSet::new());
    }

    let mut stems = BTreeSet::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                stems.insert(stem.to_string());
            }
        }
    }

    tracing::debug!("{} json files in {}", stems.len(), dir.display());
    Ok(stems)
}
