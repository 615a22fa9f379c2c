use std::collections::{BTreeMap, BTreeSet};

/// 一个方块名覆盖一个文件名：二者相等，或文件名以 "<方块名>_" 开头
fn covers(identifier: &str, stem: &str) -> bool {
    stem == identifier
        || (stem.starts_with(identifier) && stem.as_bytes().get(identifier.len()) == Some(&b'_'))
}

/// 把文件名集合归类到方块名上。
/// 多个方块名都能匹配同一个文件名时取最长的（最具体的）；
/// 长度相同时取字典序最小的，保证结果与集合遍历顺序无关。
/// 没有归属的文件名进入 extra 列表（字典序）。
pub fn associate(
    identifiers: &BTreeSet<String>,
    basenames: &BTreeSet<String>,
) -> (BTreeMap<String, BTreeSet<String>>, Vec<String>) {
    let mut matched: BTreeMap<String, BTreeSet<String>> = identifiers
        .iter()
        .map(|identifier| (identifier.clone(), BTreeSet::new()))
        .collect();
    let mut extra = Vec::new();

    for stem in basenames {
        let mut best: Option<&str> = None;
        for identifier in identifiers {
            if !covers(identifier, stem) {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    identifier.len() > current.len()
                        || (identifier.len() == current.len() && identifier.as_str() < current)
                }
            };
            if better {
                best = Some(identifier.as_str());
            }
        }

        match best {
            Some(identifier) => {
                if let Some(stems) = matched.get_mut(identifier) {
                    stems.insert(stem.clone());
                }
            }
            None => extra.push(stem.clone()),
        }
    }

    (matched, extra)
}
