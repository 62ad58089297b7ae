// src/main.rs

// Declare modules for the application
mod config;
mod db;
mod errors;
mod metrics;
mod models;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::services::search_mirror::SearchMirror;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting products API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPoolOptions::new()
    .min_connections(app_config.database_pool_min)
    .max_connections(app_config.database_pool_max)
    .connect(&app_config.database_url)
    .await
  {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Schema setup must complete before the listener accepts traffic.
  if let Err(e) = db::init_schema(&db_pool).await {
    tracing::error!(error = %e, "Failed to initialize database schema.");
    panic!("Schema initialization error: {}", e);
  }
  tracing::info!("Database schema ready.");

  // The search mirror is optional; running without it only disables mirror
  // writes and mirror-backed search.
  let search_mirror = match app_config.elasticsearch_url.as_deref() {
    Some(url) => match SearchMirror::new(url) {
      Ok(mirror) => {
        tracing::info!(endpoint = url, "Search mirror enabled.");
        Some(Arc::new(mirror))
      }
      Err(e) => {
        tracing::warn!(error = %e, "Failed to construct search mirror client; continuing without it.");
        None
      }
    },
    None => {
      tracing::info!("ELASTICSEARCH_URL not set; search mirror disabled.");
      None
    }
  };

  // Create AppState
  let app_state = AppState {
    db_pool: db_pool.clone(),
    search_mirror,
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(web::json_error_config())
      .app_data(web::query_error_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
