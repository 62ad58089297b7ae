// src/state.rs
use crate::config::AppConfig;
use crate::services::search_mirror::SearchMirror;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  // Absent mirror and failing mirror are treated identically by handlers.
  pub search_mirror: Option<Arc<SearchMirror>>,
  pub config: Arc<AppConfig>, // Share loaded config
}
