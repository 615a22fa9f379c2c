use crate::config::CheckConfig;
use crate::core::{index, matcher, registry, report};
use crate::domain::model::{CategoryCheck, CheckResult, ScanData};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct CheckPipeline {
    config: CheckConfig,
}

impl CheckPipeline {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }
}

impl Pipeline for CheckPipeline {
    fn extract(&self) -> Result<ScanData> {
        // 1. 读取 block_id.json 的方块名
        let identifiers =
            registry::load_identifiers(&self.config.registry_path(), &self.config.mod_id)?;
        println!(
            "从 {} 读取到 {} 个方块",
            self.config.registry_file,
            identifiers.len()
        );

        // 2. 列出 recipe / loot_table 目录下的 json 文件
        let recipe_stems = index::list_json_basenames(&self.config.recipe_dir())?;
        let loot_stems = index::list_json_basenames(&self.config.loot_dir())?;

        Ok(ScanData {
            identifiers,
            recipe_stems,
            loot_stems,
        })
    }

    fn transform(&self, data: ScanData) -> Result<CheckResult> {
        let (matched, extra) = matcher::associate(&data.identifiers, &data.recipe_stems);
        let recipe = CategoryCheck { matched, extra };
        println!("\nrecipe 目录中找到 {} 个 json 文件", recipe.total_files());

        let (matched, extra) = matcher::associate(&data.identifiers, &data.loot_stems);
        let loot = CategoryCheck { matched, extra };
        println!(
            "\nloot_table/blocks 目录中找到 {} 个 json 文件",
            loot.total_files()
        );

        Ok(CheckResult {
            identifiers: data.identifiers,
            recipe,
            loot,
        })
    }

    fn load(&self, result: CheckResult) -> Result<String> {
        let report_text = report::render_markdown(&result);
        let report_path = self.config.report_path();

        // 整份覆盖写入，不追加
        std::fs::write(&report_path, report_text.as_bytes())?;
        println!("\n[信息] 已生成 Markdown 报告: {}", report_path.display());

        Ok(report_path.display().to_string())
    }
}
