// src/db/product_repo.rs

use sqlx::PgPool;

use crate::errors::{AppError, Result};
use crate::models::product::{Product, ProductInput};

/// Newest products first.
pub async fn list(pool: &PgPool) -> Result<Vec<Product>> {
  let mut conn = pool.acquire().await?;
  let products = sqlx::query_as::<_, Product>(
    "SELECT id, name, description, price, stock FROM products ORDER BY id DESC",
  )
  .fetch_all(&mut *conn)
  .await?;
  Ok(products)
}

/// Insert a row; the store assigns the id.
pub async fn create(pool: &PgPool, input: ProductInput) -> Result<Product> {
  let mut conn = pool.acquire().await?;
  let (id,): (i32,) = sqlx::query_as(
    "INSERT INTO products (name, description, price, stock) VALUES ($1, $2, $3, $4) RETURNING id",
  )
  .bind(&input.name)
  .bind(&input.description)
  .bind(input.price)
  .bind(input.stock)
  .fetch_one(&mut *conn)
  .await?;
  Ok(input.into_product(id))
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Product> {
  let mut conn = pool.acquire().await?;
  let product = sqlx::query_as::<_, Product>(
    "SELECT id, name, description, price, stock FROM products WHERE id = $1",
  )
  .bind(id)
  .fetch_optional(&mut *conn)
  .await?;
  product.ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
}

/// Full replace of every field except `id`. Zero rows affected means the id
/// does not exist.
pub async fn update(pool: &PgPool, id: i32, input: ProductInput) -> Result<Product> {
  let mut conn = pool.acquire().await?;
  let result = sqlx::query("UPDATE products SET name = $1, description = $2, price = $3, stock = $4 WHERE id = $5")
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.stock)
    .bind(id)
    .execute(&mut *conn)
    .await?;
  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
  }
  Ok(input.into_product(id))
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<()> {
  let mut conn = pool.acquire().await?;
  let result = sqlx::query("DELETE FROM products WHERE id = $1")
    .bind(id)
    .execute(&mut *conn)
    .await?;
  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
  }
  Ok(())
}

/// Case-insensitive substring match over name and description, used when the
/// search mirror is absent or failing.
pub async fn search_fallback(pool: &PgPool, query: &str) -> Result<Vec<Product>> {
  let mut conn = pool.acquire().await?;
  let products = sqlx::query_as::<_, Product>(
    "SELECT id, name, description, price, stock FROM products WHERE name ILIKE $1 OR description ILIKE $1",
  )
  .bind(like_pattern(query))
  .fetch_all(&mut *conn)
  .await?;
  Ok(products)
}

fn like_pattern(query: &str) -> String {
  format!("%{}%", query)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn like_pattern_wraps_the_query() {
    assert_eq!(like_pattern("wid"), "%wid%");
    assert_eq!(like_pattern(""), "%%");
  }
}
