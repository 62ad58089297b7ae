// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::{AppError, Result};

/// A catalog product as stored and served. The `created_at` column is set by
/// the database and never crosses the API boundary, so it is not part of this
/// struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price: Decimal,
  pub stock: i32,
}

/// Raw create/update request body. Every field is optional at the serde layer
/// so that shape problems surface as `AppError::Validation` from `validate`,
/// not as an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub stock: Option<i32>,
}

/// A validated product body, ready for the repository.
#[derive(Debug, Clone)]
pub struct ProductInput {
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub stock: i32,
}

impl ProductPayload {
  /// Pure shape validation; performs no I/O.
  pub fn validate(self) -> Result<ProductInput> {
    let name = match self.name {
      Some(n) if !n.is_empty() => n,
      Some(_) => return Err(AppError::Validation("'name' must be a non-empty string".to_string())),
      None => return Err(AppError::Validation("'name' is required".to_string())),
    };
    let price = self
      .price
      .ok_or_else(|| AppError::Validation("'price' is required".to_string()))?;

    Ok(ProductInput {
      name,
      description: self.description,
      price,
      stock: self.stock.unwrap_or(0),
    })
  }
}

impl ProductInput {
  /// Merge the store-assigned id with the validated fields. Mutating
  /// operations return this shape rather than re-reading the row.
  pub fn into_product(self, id: i32) -> Product {
    Product {
      id,
      name: self.name,
      description: self.description,
      price: self.price,
      stock: self.stock,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn payload(value: serde_json::Value) -> ProductPayload {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn valid_payload_defaults_stock_to_zero() {
    let input = payload(json!({"name": "Widget", "price": 9.99})).validate().unwrap();
    assert_eq!(input.name, "Widget");
    assert_eq!(input.description, None);
    assert_eq!(input.price.to_string(), "9.99");
    assert_eq!(input.stock, 0);
  }

  #[test]
  fn explicit_fields_are_kept() {
    let input = payload(json!({
      "name": "Widget",
      "description": "A fine widget",
      "price": 19.5,
      "stock": 7
    }))
    .validate()
    .unwrap();
    assert_eq!(input.description.as_deref(), Some("A fine widget"));
    assert_eq!(input.stock, 7);
  }

  #[test]
  fn missing_name_is_invalid() {
    let err = payload(json!({"price": 9.99})).validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }

  #[test]
  fn empty_name_is_invalid() {
    let err = payload(json!({"name": "", "price": 9.99})).validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }

  #[test]
  fn missing_price_is_invalid() {
    let err = payload(json!({"name": "Widget"})).validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }

  #[test]
  fn into_product_merges_assigned_id() {
    let input = payload(json!({"name": "Widget", "price": 9.99})).validate().unwrap();
    let product = input.into_product(42);
    assert_eq!(product.id, 42);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.stock, 0);
  }

  #[test]
  fn product_serializes_without_timestamps() {
    let product = Product {
      id: 1,
      name: "Widget".to_string(),
      description: None,
      price: Decimal::new(999, 2),
      stock: 0,
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value, json!({"id": 1, "name": "Widget", "description": null, "price": 9.99, "stock": 0}));
  }
}
