use clap::Parser;
use holder_demo::utils::{logger, validation::Validate};
use holder_demo::{CliConfig, Demo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting holder-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut demo = Demo::new(config.demo_settings());
    if let Err(e) = demo.run(&mut std::io::stdout()).await {
        tracing::error!("Demo failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
