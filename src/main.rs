use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_alerts::cli::{Cli, Commands};
use a3s_alerts::config::AlertsConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            store,
            data_file,
        } => {
            a3s_alerts::cli::serve::execute(host, port, store, data_file).await?;
        }
        Commands::List {
            limit,
            offset,
            active,
        } => {
            let config = AlertsConfig::load()?;
            a3s_alerts::cli::list::execute(&config, limit, offset, active).await?;
        }
        Commands::Config => {
            let config = AlertsConfig::load()?;
            a3s_alerts::cli::config::execute(&config)?;
        }
    }

    Ok(())
}
