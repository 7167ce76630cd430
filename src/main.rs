use clap::Parser;
use mahalle_scraper::core::ConfigProvider;
use mahalle_scraper::utils::{logger, validation::Validate};
use mahalle_scraper::{CliConfig, EtlEngine, LocalStorage, NeighborhoodPipeline, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting mahalle-scraper");
    tracing::debug!("CLI config: {:?}", args);

    match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config).await,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => run(args).await,
    }

    Ok(())
}

/// Scrape failures never change the exit status; only an unusable
/// configuration does.
async fn run<C: ConfigProvider + Validate + std::fmt::Debug>(config: C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Effective config: {:?}", config);

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = NeighborhoodPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let outcome = engine.run().await;
    match &outcome.output_path {
        Some(path) => tracing::info!("✅ Saved {} neighborhoods to {}", outcome.records.len(), path),
        None => tracing::warn!("No output written (stopped at {:?})", outcome.stage),
    }
}
