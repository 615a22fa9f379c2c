use clap::Parser;

use block_check::utils::{logger, validation::Validate};
use block_check::{CheckEngine, CheckError, CheckPipeline, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting block-check");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let pipeline = CheckPipeline::new(config);
    let engine = CheckEngine::new(pipeline);

    match engine.run() {
        Ok(report_path) => {
            tracing::info!("✅ Block check completed");
            tracing::info!("📁 Report saved to: {}", report_path);
            println!("\n========= 检查完成 =========");
        }
        Err(e @ CheckError::RegistryMissingError { .. }) => {
            // 注册表缺失按原样提示后正常退出，不生成报告
            tracing::error!("❌ {}", e);
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!("❌ Block check failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
