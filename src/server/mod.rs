//! HTTP server.
//!
//! Provides two endpoints:
//! - `GET /ip` - the caller's address
//! - `GET /lookup?ip=<address>` - reverse DNS and geo-IP enrichment
//!
//! Everything else answers `404 {"message":"Not found"}`, and `OPTIONS` on any
//! path answers `204` (CORS preflight).

mod cors;
mod handlers;
mod response;
mod state;

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error_handling::InitializationError;
use handlers::{client_ip_handler, lookup_handler, not_found_handler};

pub use cors::{cors_middleware, CorsPolicy};
pub use response::{IpResponse, MessageBody};
pub use state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = state.cors.clone();

    Router::new()
        .route("/ip", get(client_ip_handler).fallback(not_found_handler))
        .route("/lookup", get(lookup_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn_with_state(cors, cors_middleware))
}

/// Binds the listener for `config.host:config.port`.
///
/// Port `0` binds an ephemeral port; the returned address is the real one.
///
/// # Errors
///
/// Returns `InitializationError::BindError` if the address cannot be bound.
pub async fn bind(config: &Config) -> Result<(TcpListener, SocketAddr), InitializationError> {
    let addr = format!("{}:{}", config.host, config.port);
    let bind_error = |source| InitializationError::BindError {
        addr: addr.clone(),
        source,
    };

    let listener = TcpListener::bind(&addr).await.map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;
    Ok((listener, local_addr))
}

/// Serves `state` on an already-bound listener until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Builds the state from `config`, binds, and serves until Ctrl-C/SIGTERM.
///
/// # Errors
///
/// Returns an error if initialization, binding, or serving fails.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let (listener, local_addr) = bind(&config).await?;

    log::info!("ip_lookup listening on http://{}/", local_addr);
    log::info!("  - Client IP: http://{}/ip", local_addr);
    log::info!("  - Lookup: http://{}/lookup?ip=<address>", local_addr);
    log::debug!(
        "Geo provider: {}, CORS origins: {:?}",
        config.geo_provider_url,
        config.normalized_cors_origins()
    );

    serve(listener, state, shutdown_signal()).await?;

    log::info!("ip_lookup stopped");
    Ok(())
}

/// Completes on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    log::info!("Shutdown signal received, stopping server");
}
