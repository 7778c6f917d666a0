//! Application router assembly and server lifecycle.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::greeting::{greeting_routes, GreetingHandlers};

/// Builds the full application router.
///
/// The greeting resource is mounted under `config.base_path`. Every request
/// passes through tracing and the request timeout. CORS is only added when
/// origins are configured.
pub fn app_router(config: &ServerConfig, handlers: GreetingHandlers) -> Router {
    let routes = greeting_routes(handlers);
    let base_path = config.normalized_base_path();

    let router = if base_path == "/" {
        routes
    } else {
        Router::new().nest(&base_path, routes)
    };

    with_middleware(router, config)
}

/// Adds tracing, the request timeout and, when origins are configured, CORS.
fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    let mut router = router
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.cors_origins_list()) {
        router = router.layer(cors);
    }

    router
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Serves `router` on the configured address until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn serve(config: &ServerConfig, router: Router) -> std::io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %listener.local_addr()?,
        base_path = %config.normalized_base_path(),
        "Starting greeting service"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
