// src/db/mod.rs

//! Database access: schema setup, the liveness probe, and the product
//! repository. Every operation here acquires exactly one pooled connection
//! and releases it on every exit path via scope drop.

pub mod product_repo;

use crate::errors::Result;
use sqlx::PgPool;

/// Idempotent schema setup. Runs at startup before the HTTP listener binds;
/// failure is fatal to the process.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
  let mut conn = pool.acquire().await?;
  sqlx::query(
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        price NUMERIC(10,2) NOT NULL,
        stock INT NOT NULL DEFAULT 0,
        created_at TIMESTAMP DEFAULT NOW()
    )
    "#,
  )
  .execute(&mut *conn)
  .await?;
  Ok(())
}

/// Trivial liveness query used by the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<()> {
  let mut conn = pool.acquire().await?;
  sqlx::query("SELECT 1").execute(&mut *conn).await?;
  Ok(())
}
