//! Gatehouse Server — user directory and token authentication service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gatehouse_core::config::AppConfig;
use gatehouse_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GATEHOUSE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Gatehouse v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = gatehouse_database::DatabasePool::connect(&config.database).await?;
    gatehouse_database::migration::run_migrations(db.pool()).await?;
    let pool = db.into_pool();

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(gatehouse_database::repositories::user::UserRepository::new(
        pool.clone(),
    ));
    let revoked_repo = Arc::new(
        gatehouse_database::repositories::revoked_token::RevokedTokenRepository::new(pool.clone()),
    );

    // ── Step 3: Auth system ──────────────────────────────────────
    let password_hasher = Arc::new(gatehouse_auth::password::PasswordHasher::new());
    let jwt_encoder = gatehouse_auth::jwt::JwtEncoder::new(&config.auth);
    let jwt_decoder = gatehouse_auth::jwt::JwtDecoder::new(&config.auth);
    let token_authority = Arc::new(gatehouse_auth::authority::TokenAuthority::new(
        jwt_encoder,
        jwt_decoder,
        Arc::clone(&password_hasher),
        Arc::clone(&user_repo),
        Arc::clone(&revoked_repo),
    ));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app_state = gatehouse_api::state::AppState {
        config: Arc::new(config.clone()),
        user_repo,
        password_hasher,
        token_authority,
    };

    let app = gatehouse_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Gatehouse listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Gatehouse shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
