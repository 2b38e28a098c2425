use anyhow::Context;
use campus::logging::init_tracing;
use campus::metrics::{init_metrics, metrics_app};
use campus::router::init_router;
use campus::state::init_app_state;
use campus_config::ServerConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config.log_dir).context("Failed to initialize tracing")?;

    let metrics_handle = init_metrics(server_config.observability_enabled)
        .context("Failed to install Prometheus recorder")?;

    let state = init_app_state()
        .await
        .context("Failed to initialize application state")?;
    let app = init_router(state);

    if let Some(handle) = metrics_handle {
        let metrics_addr = server_config.metrics_addr();
        let metrics_listener = TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(addr = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let bind_addr = server_config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Server running");
    info!("OpenAPI document available at /api-docs/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
