//! marquee-ui - Movie search web service
//!
//! Serves the search page on localhost, queries OMDb for matching titles and
//! keeps favorites and the sort preference in a local SQLite database.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use marquee_common::config::{ConfigOverrides, ServiceConfig, TomlConfig};
use marquee_common::db::init_database;
use marquee_ui::omdb::OmdbClient;
use marquee_ui::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for marquee-ui
#[derive(Parser, Debug)]
#[command(name = "marquee-ui")]
#[command(about = "Movie search web service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "MARQUEE_PORT")]
    port: Option<u16>,

    /// Folder holding marquee.db
    #[arg(short, long, env = "MARQUEE_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// OMDb API key
    #[arg(long, env = "MARQUEE_OMDB_API_KEY")]
    api_key: Option<String>,

    /// OMDb endpoint
    #[arg(long, env = "MARQUEE_OMDB_URL")]
    omdb_url: Option<String>,

    /// Number of search hits to fetch details for (1-10)
    #[arg(long, env = "MARQUEE_RESULT_COUNT")]
    result_count: Option<usize>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            root_folder: args.root_folder,
            port: args.port,
            omdb_api_key: args.api_key,
            omdb_base_url: args.omdb_url,
            result_count: args.result_count,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Log level comes from RUST_LOG, else the config file, else "info"
    let file_config = TomlConfig::load_or_default();
    let default_filter = format!(
        "marquee_ui={level},marquee_common={level},tower_http=info",
        level = file_config.log_level.as_deref().unwrap_or("info")
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Marquee (marquee-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServiceConfig::resolve(args.into(), file_config);
    info!("Root folder: {}", config.root_folder.display());
    info!("OMDb endpoint: {}", config.omdb_base_url);
    info!("Result count: {}", config.result_count);

    let db = init_database(&config.database_path())
        .await
        .context("Failed to initialize database")?;

    let omdb = OmdbClient::new(config.omdb_base_url.clone(), config.omdb_api_key.clone())
        .context("Failed to create OMDb client")?;

    let state = AppState::new(db, omdb, config.result_count)
        .context("Failed to load page templates")?;
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("marquee-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
