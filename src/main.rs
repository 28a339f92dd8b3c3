use adressbook_graphql::app::{build_schema, create_routes, AppState, Repositories};
use adressbook_graphql::core::diagnostics::ErrorReporter;
use adressbook_graphql::infrastructure::{config, database::DatabaseManager, logger::Logger};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    config.validate()?;

    // guard 需要一直持有，否则文件日志会丢失
    let _log_guard = Logger::init(&config.logging)?;

    info!("Starting adressbook GraphQL server...");
    match config::config_path() {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    if config.database.auto_migrate {
        db.ensure_schema().await?;
    }

    let reporter = ErrorReporter::new(config.diagnostics.error_log.clone());
    if let Some(path) = reporter.error_log() {
        info!("Resolver storage failures are appended to {}", path.display());
    }

    let schema = build_schema(Repositories::postgres(db.clone()), reporter);
    let app = create_routes(AppState::new(schema));

    let listener = TcpListener::bind(config.http.socket_addr()).await?;
    let addr = listener.local_addr()?;
    info!("🚀 GraphQL server running on http://{}", addr);
    info!("   GET  /  - GraphiQL console");
    info!("   POST /  - GraphQL endpoint");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
