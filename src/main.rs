//! CV Forge server entry point.
//!
//! Wires configuration, database, cache, object storage, the PDF
//! renderer, and the event broker into the HTTP application.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use cvforge_core::config::AppConfig;
use cvforge_core::error::AppError;
use cvforge_core::traits::ObjectStore;
use cvforge_render::PdfEngine;

#[tokio::main]
async fn main() {
    let env = std::env::var("CVFORGE_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CV Forge v{}", env!("CARGO_PKG_VERSION"));

    // Database connection and migrations.
    tracing::info!("Connecting to database...");
    let database = cvforge_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = database.pool().clone();

    tracing::info!("Running database migrations...");
    cvforge_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // Cache.
    tracing::info!(provider = %config.cache.provider, "Initializing cache...");
    let cache = cvforge_cache::CacheManager::new(&config.cache).await?;

    // Object storage.
    tracing::info!(endpoint = %config.storage.endpoint, "Connecting to object storage...");
    let store: Arc<dyn ObjectStore> =
        Arc::new(cvforge_storage::S3ObjectStore::connect(&config.storage).await?);
    store.ensure_bucket(&config.storage.resume_bucket).await?;
    store.ensure_bucket(&config.storage.media_bucket).await?;
    tracing::info!("Object storage ready");

    // Event broker.
    let notifier = cvforge_notify::Notifier::from_config(&config.broker).await?;

    // PDF renderer.
    let pdf: Arc<dyn PdfEngine> =
        Arc::new(cvforge_render::WkhtmltopdfEngine::new(&config.render));

    // Repositories.
    let user_repo = Arc::new(cvforge_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let resume_repo = Arc::new(
        cvforge_database::repositories::resume::ResumeRepository::new(db_pool.clone()),
    );

    // Auth components.
    let password_hasher = Arc::new(cvforge_auth::PasswordHasher::new());
    let password_validator = Arc::new(cvforge_auth::PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(cvforge_auth::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(cvforge_auth::JwtDecoder::new(&config.auth));
    let rbac = Arc::new(cvforge_auth::RbacEnforcer::new());

    // Services.
    let auth_service = Arc::new(cvforge_service::AuthService::new(
        Arc::clone(&user_repo),
        cache.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        notifier.clone(),
        &config.auth,
    ));
    let user_service = Arc::new(cvforge_service::UserService::new(
        Arc::clone(&user_repo),
        cache.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let resume_service = Arc::new(cvforge_service::ResumeService::new(
        Arc::clone(&resume_repo),
        cache.clone(),
        Arc::clone(&store),
        Arc::clone(&pdf),
        notifier.clone(),
        &config.storage,
        &config.resume,
    ));
    let media_service = Arc::new(cvforge_service::MediaService::new(
        Arc::clone(&store),
        &config.storage,
    ));

    // HTTP server.
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = cvforge_api::AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        store,
        jwt_decoder,
        rbac,
        auth_service,
        user_service,
        resume_service,
        media_service,
    };
    let app = cvforge_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CV Forge listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CV Forge shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
