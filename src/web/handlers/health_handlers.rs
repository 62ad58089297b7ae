// src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::db;
use crate::errors::AppError;
use crate::metrics::METRICS;
use crate::state::AppState;

/// Liveness probe: `SELECT 1` against the primary store, plus the mirror's
/// ping result when one is configured (`null` when it is not). The mirror
/// check swallows its own failures and can only report `false`, never break
/// the response.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  METRICS.observe_request("GET", "/health");

  db::ping(&app_state.db_pool).await?;

  let elasticsearch = match &app_state.search_mirror {
    Some(mirror) => Some(mirror.ping().await),
    None => None,
  };

  Ok(HttpResponse::Ok().json(json!({"status": "ok", "elasticsearch": elasticsearch})))
}

/// Prometheus text exposition of the process-wide registry.
pub async fn metrics_handler() -> HttpResponse {
  let (body, content_type) = METRICS.render();
  HttpResponse::Ok().content_type(content_type).body(body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{test, App};

  #[actix_web::test]
  async fn metrics_endpoint_exposes_prometheus_text() {
    METRICS.observe_request("GET", "/metrics");

    let app = test::init_service(App::new().route("/metrics", web::get().to(metrics_handler))).await;
    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
      .headers()
      .get("content-type")
      .and_then(|v| v.to_str().ok())
      .unwrap_or_default()
      .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("products_api_http_requests_total"));
  }
}
