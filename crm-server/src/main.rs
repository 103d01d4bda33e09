use crm_server::{AppState, build_router, logger};

use crm_auth::{JwtIssuer, LoginRateLimiter, PasswordHasher};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = crm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = crm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting crm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .foreign_keys(true)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/crm-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Token issuer with the injected secret; validate() guarantees presence
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_ref()
        .expect("validate() ensures auth.jwt_secret is set");
    let jwt = Arc::new(JwtIssuer::with_hs256(
        jwt_secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));
    info!("JWT: HS256 signing enabled");

    let login_limiter = Arc::new(LoginRateLimiter::new(crm_auth::RateLimitConfig {
        max_attempts: config.rate_limit.max_attempts,
        window_secs: config.rate_limit.window_secs,
    }));

    // Build application state
    let app_state = AppState {
        pool,
        jwt,
        hasher: PasswordHasher::new(),
        login_limiter,
        frontend_origin: config.cors.frontend_origin.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown; ConnectInfo feeds the guard's
    // origin logging
    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    })
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
