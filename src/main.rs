use chrono::Local;
use std::{env, net::SocketAddr, sync::Arc, time::Duration};
use study_planner::{AppState, EnvHost, load_store, reminder, resolve_data_dir, router};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let data = load_store(&data_dir, Local::now().date_naive()).await;
    let state = AppState::new(data_dir, data, Arc::new(EnvHost::from_env()));

    if let Err(err) = reminder::run_due_check(&state).await {
        error!("startup reminder check failed: {}", err.message);
    }

    let timer_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(60 * 60));
        ticker.tick().await; // the startup check already ran
        loop {
            ticker.tick().await;
            if let Err(err) = reminder::run_due_check(&timer_state).await {
                error!("hourly reminder check failed: {}", err.message);
            }
        }
    });

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

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
    }
}
