// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::series_service::SeriesService;
use crate::infrastructure::catalog_loader::load_catalog;
use crate::infrastructure::config::{load_dashboard_config, load_settings};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, get_system_stream, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;
    let dashboard_config = load_dashboard_config()?;

    // Load the immutable catalog snapshot (infrastructure layer)
    let store = Arc::new(load_catalog(Path::new(&settings.catalog.path))?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(store.clone(), dashboard_config);
    let series_service = SeriesService::new(store.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        series_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/systems/:id/streams/:name", get(get_system_stream))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = settings
        .server
        .bind_addr
        .parse()
        .context("invalid server.bind_addr")?;
    println!("Starting plant-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
