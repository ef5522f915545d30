use clap::Parser;
use queue_smoke::config::toml_config::TomlConfig;
use queue_smoke::core::report;
use queue_smoke::utils::{logger, validation::Validate};
use queue_smoke::{build_client, CliConfig, QueueCheck, SqsQueueLister};

/// 設定錯誤的退出碼
const CONFIG_ERROR_EXIT: i32 = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 建立日誌 (僅在 main 期間生效)
    let subscriber = logger::cli_subscriber(cli.verbose, cli.log_format);
    let _log_guard = tracing::subscriber::set_default(subscriber);

    tracing::info!("Starting queue-smoke post-deploy check");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入 TOML 配置
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path.display(), e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    std::process::exit(CONFIG_ERROR_EXIT);
                }
            }
        }
        None => None,
    };

    let settings = cli.into_settings(file);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(CONFIG_ERROR_EXIT);
    }

    report::warn_missing_parts(&settings.missing_parts());

    let client = build_client(&settings.aws).await;
    let check = QueueCheck::new(SqsQueueLister::new(client), settings.expected_name());
    tracing::info!("🔍 Checking for SQS queue '{}'", check.expected());

    let outcome = check.run().await;
    report::log_outcome(&outcome);

    let exit_code = outcome.exit_code(settings.strict);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
