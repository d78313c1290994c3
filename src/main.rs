use anyhow::Result;
use clap::{Parser, Subcommand};
use devdarshan_catalog::FilterState;

/// devdarshan - Puja booking and live darshan
#[derive(Parser)]
#[command(name = "devdarshan")]
#[command(about = "Temple puja catalog and booking site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the puja catalog as JSON, filtered like the catalog page
    Catalog {
        /// Free-text search over title and description
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        trending: Option<String>,

        #[arg(long)]
        region: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = devdarshan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    devdarshan::observability::init_observability(
        "devdarshan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Catalog {
            query,
            category,
            trending,
            region,
        } => catalog_command(FilterState {
            search: query.unwrap_or_default(),
            category,
            trending,
            region,
        }),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: devdarshan::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting devdarshan server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let app = devdarshan::create_app(config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}

fn catalog_command(filter: FilterState) -> Result<()> {
    let offerings = devdarshan_catalog::filter(devdarshan_catalog::CATALOG, &filter);
    tracing::debug!(results = offerings.len(), "catalog filtered");

    println!("{}", serde_json::to_string_pretty(&offerings)?);

    Ok(())
}
