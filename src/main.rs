use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tourist_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use tourist_guide::router::init_router;
use tourist_guide::state::{AppState, init_store};
use tourist_observability::init_tracing;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let cors_config = CorsConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let store = init_store(&database_config)
        .await
        .context("failed to open document store")?;

    warn!(
        "PATCH /users/guide/{{id}} only requires a valid token: any signed-in user can grant the guide role"
    );

    let state = AppState::new(store.clone(), jwt_config, cors_config, server_config.clone());
    let app = init_router(state);

    let listener = TcpListener::bind(server_config.addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.addr))?;
    info!(addr = %server_config.addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", server_config.addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    served.context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
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

    info!("shutdown signal received, draining connections");
}
