use anyhow::Result;
use clap::{Parser, Subcommand};
use fieldflux_core::{DEFAULT_HTTP_PORT, env_parse_with_default};
use fieldflux_storage::PgStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fieldflux")]
#[command(about = "Geospatial browser for agronomic field-trial records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        #[arg(short, long, default_value_t = default_port())]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Print the site list as JSON.
    Sites,
    /// Print the flux sampling timelines as JSON.
    Timeline,
    /// Print row counts per record table.
    Stats,
    /// Create the record tables if absent (dev/test bootstrap).
    InitSchema,
}

fn default_port() -> u16 {
    env_parse_with_default("FIELDFLUX_PORT", DEFAULT_HTTP_PORT)
}

fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; a missing file is the normal case in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let store = PgStore::new(&get_database_url()?).await?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(store, port, host).await?,
        Commands::Sites => commands::inspect::run_sites(&store).await?,
        Commands::Timeline => commands::inspect::run_timeline(&store).await?,
        Commands::Stats => commands::inspect::run_stats(&store).await?,
        Commands::InitSchema => {
            store.ensure_schema().await?;
            tracing::info!("schema ready");
        },
    }

    Ok(())
}
