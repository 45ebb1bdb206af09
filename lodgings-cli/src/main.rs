//! lodgings CLI - serve the lodging collection API
//!
//! `lodgings serve` starts the HTTP server against PostgreSQL by
//! default; `--memory` swaps in the in-memory store.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use lodgings_server::config::ServerConfig;
use lodgings_server::store::{create_pool_with_options, LodgingStore, MemoryStore, PgStore};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lodgings",
    author,
    version,
    about = "Paginated CRUD HTTP API for a lodging collection"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Port to bind (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Use the in-memory store instead of PostgreSQL
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    let store: Arc<dyn LodgingStore> = if args.memory {
        tracing::info!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let pool = create_pool_with_options(&config.database.url(), config.database.pool_size)
            .await
            .context("could not connect to PostgreSQL")?;
        let store = PgStore::new(pool);
        store
            .ensure_schema()
            .await
            .context("schema setup failed")?;
        Arc::new(store)
    };

    lodgings_server::http::run_server(store, config.port).await?;
    Ok(())
}
