use crate::domain::model::{CategoryCheck, CheckResult};

/// 渲染 Markdown 检查报告。
/// 表格排序：recipe 和 loot 都完成的方块排最前，其次缺一类，最后缺两类；
/// 同组内按方块名字典序，保证两次运行输出完全一致。
pub fn render_markdown(result: &CheckResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# 方块检查报告".to_string());
    lines.push(String::new());
    lines.push(format!("- 总方块数量：{}", result.identifiers.len()));
    lines.push(format!("- recipe 文件数：{}", result.recipe.total_files()));
    lines.push(format!(
        "- loot_table/blocks 文件数：{}",
        result.loot.total_files()
    ));
    lines.push(String::new());

    lines.push("## 方块完成情况总览".to_string());
    lines.push(String::new());
    lines.push("| 方块名 | 合成配方 | 破坏掉落 |".to_string());
    lines.push("| ------ | -------- | -------- |".to_string());

    let mut names: Vec<&str> = result.identifiers.iter().map(String::as_str).collect();
    names.sort_by_key(|name| sort_key(result, *name));

    for name in names {
        lines.push(format!(
            "| {} | {} | {} |",
            name,
            status_cell(&result.recipe, name),
            status_cell(&result.loot, name)
        ));
    }

    lines.push(String::new());
    lines.push("## 目录中多余的文件".to_string());
    lines.push(String::new());
    lines.push("### 合成配方（recipe）目录中多余的文件".to_string());
    push_extra_section(&mut lines, &result.recipe.extra);
    lines.push(String::new());
    lines.push("### 方块战利品表（loot_table/blocks）目录中多余的文件".to_string());
    push_extra_section(&mut lines, &result.loot.extra);

    lines.join("\n") + "\n"
}

fn sort_key<'a>(result: &CheckResult, name: &'a str) -> (usize, usize, usize, &'a str) {
    let recipe_flag = usize::from(result.recipe.match_count(name) == 0);
    let loot_flag = usize::from(result.loot.match_count(name) == 0);
    (recipe_flag + loot_flag, recipe_flag, loot_flag, name)
}

fn status_cell(category: &CategoryCheck, name: &str) -> String {
    match category.match_count(name) {
        0 => "❌".to_string(),
        count => format!("🎉 x{}", count),
    }
}

fn push_extra_section(lines: &mut Vec<String>, extra: &[String]) {
    lines.push(String::new());
    if extra.is_empty() {
        lines.push("- 无".to_string());
    } else {
        for name in extra {
            lines.push(format!("- {}.json", name));
        }
    }
}
