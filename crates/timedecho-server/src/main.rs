//! timedecho server
//!
//! - `GET /sync-get`, `POST /sync-post`: blocking handlers on the blocking pool
//! - `GET /async-get`, `POST /async-post`: suspending handlers
//! - Every handler logs entry/exit and returns `{result, execution_time}`

use tracing_subscriber::{fmt, EnvFilter};

use timedecho_core::error::{EchoError, Result};
use timedecho_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    fmt().with_env_filter(filter).init();

    let listen = cfg.listen_addr()?;
    let state = app_state::AppState::new(cfg)?;

    let server = &state.cfg().server;
    tracing::info!(
        %listen,
        blocking_workers = server.blocking_workers,
        max_sleep_sec = ?server.max_sleep_sec,
        logger = %state.cfg().logging.logger,
        "timedecho starting"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| EchoError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EchoError::Internal(format!("server failed: {e}")))?;

    tracing::info!("timedecho stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
