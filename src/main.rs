use std::sync::Arc;

use greeting_service::adapters::http::{app_router, serve, GreetingHandlers};
use greeting_service::config::{AppConfig, ConfigError};
use greeting_service::domain::greeting::MethodRegistry;
use greeting_service::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;
    config.validate().map_err(ConfigError::from)?;

    let registry = MethodRegistry::with_greeting_methods();
    tracing::info!(methods = ?registry.names(), "Registered greeting methods");

    let handlers = GreetingHandlers::with_invoker(Arc::new(registry));
    let router = app_router(&config.server, handlers);

    serve(&config.server, router).await?;
    Ok(())
}
