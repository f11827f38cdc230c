/// Songbook Server - song catalog with lookup-based enrichment
use axum::Router;
use clap::{Parser, Subcommand};
use songbook_lookup_client::{LookupClient, LookupConfig};
use songbook_server::{
    api,
    config::{ServerConfig, ServerSettings},
    services::SongService,
    state::AppState,
};
use songbook_storage::SqliteSongStore;
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "songbook-server")]
#[command(about = "Song catalog server with metadata lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "SONGBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long, env = "SONGBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "songbook_server=info,songbook_storage=info,songbook_lookup_client=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded .env from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Migrate { config } => {
            migrate(config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Songbook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool =
        songbook_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    songbook_storage::run_migrations(&pool).await?;
    let store = Arc::new(SqliteSongStore::new(pool));
    tracing::info!("Database connected");

    // Initialize lookup client
    let lookup = LookupClient::new(
        LookupConfig::new(config.lookup.base_url.clone())
            .with_timeout(config.lookup.timeout())
            .with_connect_timeout(config.lookup.connect_timeout()),
    )?;
    tracing::info!("Lookup client targeting {}", lookup.base_url());
    let lookup = Arc::new(lookup);

    // Build application state
    let songs = Arc::new(SongService::new(store, lookup));
    let app_state = AppState::new(songs);

    // Build router
    let app = create_router(app_state, &config.server);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    api::router(app_state)
        .layer(TimeoutLayer::new(settings.request_timeout()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}

async fn migrate(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let pool =
        songbook_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    songbook_storage::run_migrations(&pool).await?;

    tracing::info!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}
