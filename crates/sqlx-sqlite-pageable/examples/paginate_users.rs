//! Walks a `user` table page by page.
//!
//! Seeds an on-disk SQLite database with a handful of users, then issues the
//! classic "page 2, ten per page, newest-first-ish" request: sort by
//! `created_on` and `status` ascending with `name` descending as the final
//! tie-break. Executing the enhanced SQL is ordinary sqlx from here on.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Row, SqlitePool};
use sqlx_sqlite_catalog::TableCatalog;
use sqlx_sqlite_pageable::{PageRequest, paginate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
   let temp_dir = tempfile::TempDir::new()?;
   let options = SqliteConnectOptions::new()
      .filename(temp_dir.path().join("demo.db"))
      .create_if_missing(true);
   let pool = SqlitePool::connect_with(options).await?;

   sqlx::query(
      "CREATE TABLE user (
         id TEXT NOT NULL PRIMARY KEY,
         name TEXT NOT NULL,
         status TEXT NOT NULL,
         created_on TEXT NOT NULL
      )",
   )
   .execute(&pool)
   .await?;

   for i in 1..=25 {
      sqlx::query("INSERT INTO user (id, name, status, created_on) VALUES ($1, $2, $3, $4)")
         .bind(format!("u{:02}", i))
         .bind(format!("User {}", i))
         .bind(if i % 4 == 0 { "pending" } else { "active" })
         .bind(format!("2024-02-{:02}", i))
         .execute(&pool)
         .await?;
   }

   // The catalog could also be spelled out with TableCatalog::builder —
   // introspection just keeps it in sync with the table for free
   let mut conn = pool.acquire().await?;
   let catalog = TableCatalog::introspect(&mut *conn, "user").await?;
   drop(conn);

   let request = PageRequest::new(2, 10)
      .sort_asc("created_on")
      .sort_asc("status")
      .sort_desc("name");

   let sql = paginate("SELECT id, name, status, created_on FROM user", &request, &catalog)?;
   println!("{}\n", sql);

   for row in sqlx::query(&sql).fetch_all(&pool).await? {
      println!(
         "{}  {:10}  {:8}  {}",
         row.get::<String, _>("id"),
         row.get::<String, _>("name"),
         row.get::<String, _>("status"),
         row.get::<String, _>("created_on"),
      );
   }

   pool.close().await;
   Ok(())
}
