// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fuel Log API Server
//!
//! Serves refuel records and consumption analytics for the fuel log
//! mini-app, backed by an upstream webhook store.

use fuel_log::{config::Config, routes::create_router, services::FuelApiClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Fuel Log API");

    let fuel_api = FuelApiClient::new(&config)?;
    tracing::info!(
        fuel_url = %config.fuel_webhook_url,
        vehicles_url = %config.vehicles_webhook_url,
        timeout_secs = config.upstream_timeout_secs,
        "Upstream client initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        fuel_api,
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fuel_log=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
