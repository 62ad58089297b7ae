// src/metrics.rs

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub static METRICS: Lazy<ApiMetrics> = Lazy::new(ApiMetrics::init);

pub struct ApiMetrics {
  registry: Registry,
  http_requests_total: IntCounterVec,
  search_fallback_total: IntCounter,
}

impl ApiMetrics {
  fn init() -> Self {
    let registry = Registry::new();

    let http_requests_total = IntCounterVec::new(
      Opts::new("products_api_http_requests_total", "Total HTTP requests handled"),
      &["method", "endpoint"],
    )
    .expect("failed to build http_requests_total counter");

    let search_fallback_total = IntCounter::new(
      "products_api_search_fallback_total",
      "Searches answered by the primary store instead of the mirror",
    )
    .expect("failed to build search_fallback_total counter");

    registry
      .register(Box::new(http_requests_total.clone()))
      .expect("failed to register http_requests_total");
    registry
      .register(Box::new(search_fallback_total.clone()))
      .expect("failed to register search_fallback_total");

    Self {
      registry,
      http_requests_total,
      search_fallback_total,
    }
  }

  pub fn observe_request(&self, method: &str, endpoint: &str) {
    self.http_requests_total.with_label_values(&[method, endpoint]).inc();
  }

  pub fn observe_fallback(&self) {
    self.search_fallback_total.inc();
  }

  /// Render the registry in the Prometheus text exposition format.
  pub fn render(&self) -> (Vec<u8>, String) {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&self.registry.gather(), &mut buffer) {
      tracing::error!(error = %e, "Failed to encode metrics.");
    }
    (buffer, encoder.format_type().to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_exposes_observed_counters() {
    METRICS.observe_request("GET", "/products");
    METRICS.observe_fallback();

    let (body, content_type) = METRICS.render();
    let text = String::from_utf8(body).unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert!(text.contains("products_api_http_requests_total"));
    assert!(text.contains("products_api_search_fallback_total"));
  }
}
