// src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route(
      "/health",
      web::get().to(crate::web::handlers::health_handlers::health_handler),
    )
    .route(
      "/metrics",
      web::get().to(crate::web::handlers::health_handlers::metrics_handler),
    )
    .service(
      web::scope("/products")
        // Registered ahead of `/{product_id}` so "search" is never parsed as an id.
        .route(
          "/search",
          web::get().to(crate::web::handlers::product_handlers::search_products_handler),
        )
        .route(
          "",
          web::get().to(crate::web::handlers::product_handlers::list_products_handler),
        )
        .route(
          "",
          web::post().to(crate::web::handlers::product_handlers::create_product_handler),
        )
        .route(
          "/{product_id}",
          web::get().to(crate::web::handlers::product_handlers::get_product_handler),
        )
        .route(
          "/{product_id}",
          web::put().to(crate::web::handlers::product_handlers::update_product_handler),
        )
        .route(
          "/{product_id}",
          web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
        ),
    );
}

// Body and query shape problems are the same failure class as a missing
// required field: 422, before any handler runs.
pub fn json_error_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid JSON payload: {}", err)).into())
}

pub fn query_error_config() -> web::QueryConfig {
  web::QueryConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid query string: {}", err)).into())
}
