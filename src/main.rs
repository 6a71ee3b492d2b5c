use std::net::SocketAddr;
use store_status::{
    AppState, Config, client::StatusClient, load_preferences, loader::Loader, router,
    selection::SelectionController,
};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let prefs = load_preferences(&config.data_path).await;
    let selection =
        SelectionController::new(&config.users, prefs.selected_user, &config.default_user);
    info!(user = selection.current(), "restored selection");

    let client = StatusClient::new(config.status_url.clone(), config.request_timeout)?;
    info!(backend = client.base_url(), "using status backend");

    let state = AppState::new(config.data_path.clone(), selection, Loader::new(client));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
