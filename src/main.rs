use clap::Parser;
use coupling_demo::utils::{logger, validation::Validate};
use coupling_demo::{CliConfig, ConsoleSink, DemoEngine, OutputFormat};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting coupling-demo");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        anyhow::bail!(e.user_friendly_message());
    }

    let sink = Arc::new(ConsoleSink::stdout(config.format));
    let engine = DemoEngine::new(sink, config.message).with_tight_consumer(config.with_tight);

    match engine.run() {
        Ok(summary) => {
            tracing::debug!("Delivered via {:?}", summary.channels);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Demo failed: {}", e);
            Err(anyhow::anyhow!(e.user_friendly_message()))
        }
    }
}
