// src/services/search_mirror.rs

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::models::product::Product;

const INDEX: &str = "products";
// A hung mirror must not stall the health or search paths.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort Elasticsearch client. Every failure stays behind this
/// boundary: writers discard the returned error, readers treat it as "fall
/// back to the primary store".
pub struct SearchMirror {
  http: Client,
  base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
  hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
  hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
  #[serde(rename = "_source")]
  source: Product,
}

impl SearchMirror {
  pub fn new(base_url: &str) -> Result<Self> {
    let http = Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .context("failed to build search mirror HTTP client")?;
    Ok(Self {
      http,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Upsert the product document keyed by its row id.
  #[instrument(name = "mirror::index_document", skip(self, product), fields(product_id = id))]
  pub async fn index_document(&self, id: i32, product: &Product) -> Result<()> {
    let url = format!("{}/{}/_doc/{}", self.base_url, INDEX, id);
    self
      .http
      .put(&url)
      .json(product)
      .send()
      .await
      .context("index request failed")?
      .error_for_status()
      .context("index request rejected")?;
    Ok(())
  }

  /// Remove the document; a missing document is a failure like any other and
  /// is ignored by callers.
  #[instrument(name = "mirror::delete_document", skip(self), fields(product_id = id))]
  pub async fn delete_document(&self, id: i32) -> Result<()> {
    let url = format!("{}/{}/_doc/{}", self.base_url, INDEX, id);
    self
      .http
      .delete(&url)
      .send()
      .await
      .context("delete request failed")?
      .error_for_status()
      .context("delete request rejected")?;
    Ok(())
  }

  /// Health probe; `false` on any failure.
  pub async fn ping(&self) -> bool {
    match self.http.head(&self.base_url).send().await {
      Ok(resp) => resp.status().is_success(),
      Err(e) => {
        debug!(error = %e, "Search mirror ping failed.");
        false
      }
    }
  }

  /// Multi-field match over name and description. An `Err` here means the
  /// caller should answer from the primary store instead.
  #[instrument(name = "mirror::search", skip(self))]
  pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
    let url = format!("{}/{}/_search", self.base_url, INDEX);
    let response = self
      .http
      .post(&url)
      .json(&search_body(query))
      .send()
      .await
      .context("search request failed")?
      .error_for_status()
      .context("search request rejected")?
      .json::<SearchResponse>()
      .await
      .context("search response malformed")?;
    Ok(response.hits.hits.into_iter().map(|h| h.source).collect())
  }
}

fn search_body(query: &str) -> serde_json::Value {
  json!({
    "query": {
      "multi_match": {
        "query": query,
        "fields": ["name", "description"]
      }
    }
  })
}
