pub mod modules;
pub mod routes;
mod schema;
pub mod shared;

use modules::{
    access::{AccessGuard, SessionRepository, SessionRepositoryImpl},
    teacher_search::{SearchTeachersHandler, TeacherRepository, TeacherRepositoryImpl},
};
use routes::{build_router, AppState};
use shared::{
    utils::init_logger, AppConfig, ConnectionSettings, DatabaseHealthMonitor, DatabaseState,
};
use std::sync::Arc;

/// Boot the HTTP service: configuration, logging, database, wiring, serve.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();
    let config = AppConfig::from_env()?;

    let settings = ConnectionSettings {
        database_url: config.database_url.clone(),
        max_pool_size: config.db_max_pool_size,
    };

    // Initializing the pool blocks on the first connection
    let init_settings = settings.clone();
    let initial_state =
        tokio::task::spawn_blocking(move || DatabaseState::initialize(&init_settings)).await?;

    // Run migrations if database is available, otherwise continue degraded
    match initial_state.get_database() {
        Ok(database) => {
            match tokio::task::spawn_blocking(move || database.run_migrations()).await? {
                Ok(applied) => log::info!("Database migrations completed ({} applied)", applied),
                Err(e) => {
                    log::error!("Failed to run database migrations: {}", e);
                    log::warn!("Service will continue with limited functionality");
                }
            }
        }
        Err(e) => {
            log::error!("Database unavailable during startup: {}", e);
            log::warn!("Requests will fail until the database is reachable; retrying in the background");
        }
    }

    let health_monitor = DatabaseHealthMonitor::new(initial_state, settings);
    let db_state = health_monitor.get_state();
    let monitor_handle = health_monitor.start_monitoring();

    // Cast to trait objects for dependency injection
    let teacher_repo: Arc<dyn TeacherRepository> =
        Arc::new(TeacherRepositoryImpl::new(Arc::clone(&db_state)));
    let session_repo: Arc<dyn SessionRepository> =
        Arc::new(SessionRepositoryImpl::new(Arc::clone(&db_state)));

    let state = AppState {
        access_guard: Arc::new(AccessGuard::new(session_repo)),
        search_teachers: Arc::new(SearchTeachersHandler::new(teacher_repo)),
        pagination: config.pagination,
        db_state,
    };

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    log::info!("Listening on {}", config.server_addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    monitor_handle.abort();
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
