use std::{net::SocketAddr, str::FromStr};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    api::{self, AppState},
    info,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to parse server address {0}: {1}")]
    InvalidAddress(String, #[source] std::net::AddrParseError),

    #[error("Invalid CORS origin {0}")]
    InvalidOrigin(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Wraps the API router with CORS and request tracing.
pub fn app(state: AppState, allowed_origin: &str) -> Result<Router, ServerError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| ServerError::InvalidOrigin(allowed_origin.to_string()))?;

    let cors_layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Ok(api::router(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http()))
}

pub async fn start_api_server(
    addr: &str,
    state: AppState,
    allowed_origin: &str,
) -> Result<(), ServerError> {
    let app = app(state, allowed_origin)?;

    let addr = SocketAddr::from_str(addr)
        .map_err(|e| ServerError::InvalidAddress(addr.to_string(), e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. If the signal cannot be listened for, never resolves.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        // Without a signal handler the server keeps running until killed
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
