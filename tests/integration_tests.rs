use anyhow::Result;
use block_check::{CheckConfig, CheckEngine, CheckPipeline};
use std::fs;
use tempfile::TempDir;

/// 按配置在临时目录里摆好 datapack 结构
fn setup_pack(config: &CheckConfig, registry: &str, recipes: &[&str], loots: &[&str]) {
    fs::write(config.registry_path(), registry).unwrap();
    fs::create_dir_all(config.recipe_dir()).unwrap();
    fs::create_dir_all(config.loot_dir()).unwrap();
    for name in recipes {
        fs::write(config.recipe_dir().join(name), "{}").unwrap();
    }
    for name in loots {
        fs::write(config.loot_dir().join(name), "{}").unwrap();
    }
}

fn run_check(config: CheckConfig) -> block_check::Result<String> {
    let engine = CheckEngine::new(CheckPipeline::new(config));
    engine.run()
}

#[test]
fn test_end_to_end_stone_dirt_scenario() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = CheckConfig::new(temp_dir.path());
    config.mod_id = "mod".to_string();

    setup_pack(
        &config,
        r#"{"a": "mod:stone", "b": "mod:dirt"}"#,
        &["stone.json"],
        &["dirt.json", "stone.json", "foobar.json"],
    );

    let report_path = run_check(config.clone())?;
    let report = fs::read_to_string(&report_path)?;

    // 头部统计
    assert!(report.contains("- 总方块数量：2"));
    assert!(report.contains("- recipe 文件数：1"));
    assert!(report.contains("- loot_table/blocks 文件数：3"));

    // stone 两类都完成，dirt 缺 recipe
    assert!(report.contains("| stone | 🎉 x1 | 🎉 x1 |"));
    assert!(report.contains("| dirt | ❌ | 🎉 x1 |"));

    // 完成的方块排在前面
    let stone_row = report.find("| stone |").unwrap();
    let dirt_row = report.find("| dirt |").unwrap();
    assert!(stone_row < dirt_row);

    // loot 目录里有一个多余文件，recipe 目录没有
    assert!(report.contains("- foobar.json"));
    let recipe_section = report
        .split("### 合成配方（recipe）目录中多余的文件")
        .nth(1)
        .unwrap();
    assert!(recipe_section.starts_with("\n\n- 无"));

    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = CheckConfig::new(temp_dir.path());

    setup_pack(
        &config,
        r#"{"a": "box3:grass", "b": "box3:stone", "c": "box3:iron_ore"}"#,
        &["grass.json", "iron_ore_block.json", "stray.json"],
        &["stone.json"],
    );

    let first_path = run_check(config.clone())?;
    let first = fs::read(&first_path)?;

    let second_path = run_check(config)?;
    let second = fs::read(&second_path)?;

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_missing_scan_directories_are_not_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = CheckConfig::new(temp_dir.path());

    // 只有注册表，两个扫描目录都不存在
    fs::write(config.registry_path(), r#"{"a": "box3:grass"}"#)?;

    let report_path = run_check(config)?;
    let report = fs::read_to_string(&report_path)?;

    assert!(report.contains("- recipe 文件数：0"));
    assert!(report.contains("- loot_table/blocks 文件数：0"));
    assert!(report.contains("| grass | ❌ | ❌ |"));
    Ok(())
}

#[test]
fn test_longest_prefix_wins_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = CheckConfig::new(temp_dir.path());

    setup_pack(
        &config,
        r#"{"a": "box3:ore", "b": "box3:iron_ore"}"#,
        &["iron_ore_block.json"],
        &[],
    );

    let report_path = run_check(config)?;
    let report = fs::read_to_string(&report_path)?;

    assert!(report.contains("| iron_ore | 🎉 x1 | ❌ |"));
    assert!(report.contains("| ore | ❌ | ❌ |"));
    Ok(())
}

#[test]
fn test_report_is_overwritten_not_appended() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = CheckConfig::new(temp_dir.path());

    setup_pack(&config, r#"{"a": "box3:grass"}"#, &["grass.json"], &[]);
    fs::write(config.report_path(), "stale contents from a previous run")?;

    let report_path = run_check(config)?;
    let report = fs::read_to_string(&report_path)?;

    assert!(!report.contains("stale contents"));
    assert!(report.starts_with("# 方块检查报告"));
    Ok(())
}
