use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use projects_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = SocketAddr::new(config.host, config.port);
    let (app, state) = projects_api::build_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("projects-api listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_stop())
        .await?;

    // The store only lives in memory; say what is lost on exit.
    let discarded = state.projects.read().await.len();
    tracing::info!(discarded, "projects-api stopped");

    Ok(())
}

/// Resolve on Ctrl+C or, on unix, SIGTERM. A handler that cannot be
/// installed is logged and never fires, so the other one still works.
async fn wait_for_stop() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = interrupt => "interrupt",
        _ = terminate => "terminate",
    };

    tracing::info!(signal = received, "draining in-flight requests");
}
