use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alexandria_api::config::ServerConfig;
use alexandria_api::router::build_app_router;
use alexandria_api::state::{build_sort_mappings, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alexandria_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = alexandria_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    alexandria_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    alexandria_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Sort mappings (write-once, then shared read-only) ---
    let sort_mappings = Arc::new(build_sort_mappings());
    tracing::info!("Sort mapping tables registered");

    // --- Router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sort_mappings,
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST/PORT combination");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
