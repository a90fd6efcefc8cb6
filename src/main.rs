use clap::Parser;
use recipe_projector::config::{resolve, ActiveConfig};
use recipe_projector::utils::{logger, validation::Validate};
use recipe_projector::{
    CliConfig, EtlEngine, LocalStorage, ProjectionPipeline, ProjectorConfig, ProjectorError,
};

async fn run(config: ActiveConfig, monitor: bool) -> recipe_projector::Result<String> {
    config.validate()?;

    let pipeline = ProjectionPipeline::new(LocalStorage::default(), config);
    EtlEngine::new_with_monitoring(pipeline, monitor).run().await
}

fn exit_with(e: &ProjectorError) -> ! {
    tracing::error!(
        "❌ Projection failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔要先讀，log level 可能由它決定
    let file_config = match cli.config.as_deref().map(ProjectorConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(logger::default_filter(cli.verbose));
            exit_with(&e);
        }
    };

    let plan = resolve(cli, file_config);

    let filter = match plan.log_level.as_deref() {
        Some(level) => logger::filter_for_level(level),
        None => logger::default_filter(plan.verbose),
    };
    logger::init_cli_logger(filter);

    tracing::info!("Starting recipe-projector");
    tracing::debug!("Active config: {:?}", plan.config);

    if plan.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run(plan.config, plan.monitor).await {
        Ok(output_path) => {
            tracing::info!("✅ Projection completed, output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
