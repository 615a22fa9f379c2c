use std::collections::{BTreeMap, BTreeSet};

/// 一次扫描的原始输入：注册表里的方块名 + 两个目录下的 json 文件名（去掉扩展名）
#[derive(Debug, Clone)]
pub struct ScanData {
    pub identifiers: BTreeSet<String>,
    pub recipe_stems: BTreeSet<String>,
    pub loot_stems: BTreeSet<String>,
}

/// 单个目录（recipe 或 loot_table/blocks）的归类结果
#[derive(Debug, Clone, Default)]
pub struct CategoryCheck {
    /// 每个方块名对应它覆盖到的文件名集合（没有文件时为空集合）
    pub matched: BTreeMap<String, BTreeSet<String>>,
    /// 没有归属到任何方块名的文件，按字典序排列
    pub extra: Vec<String>,
}

impl CategoryCheck {
    pub fn match_count(&self, name: &str) -> usize {
        self.matched.get(name).map_or(0, BTreeSet::len)
    }

    pub fn total_files(&self) -> usize {
        self.matched.values().map(BTreeSet::len).sum::<usize>() + self.extra.len()
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub identifiers: BTreeSet<String>,
    pub recipe: CategoryCheck,
    pub loot: CategoryCheck,
}
