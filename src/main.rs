use anyhow::Context;
use tracing::{info, warn};

use sofi_ai::config::Config;
use sofi_ai::error::StartupError;
use sofi_ai::logging;
use sofi_ai::routes;
use sofi_ai::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env().context("invalid configuration")?;
    let state = AppState::shared();

    let app = routes::create_router().with_state(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    info!("🚀 Sofi AI listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            // Without a signal handler the server runs until killed.
            warn!(error = %err, "could not install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "could not install SIGTERM handler");
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
    info!("shutdown signal received");
}
