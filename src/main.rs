use clap::Parser;
use tracing_subscriber::EnvFilter;

use wanderwise::{app::App, cli::Cli, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(api_url = %config.api_url, user_id = %config.user_id, "Starting client");

    let app = App::new(config);
    let output = app.run(cli.command).await?;
    print!("{}", output);

    Ok(())
}
