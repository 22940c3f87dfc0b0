//! Database Module
//!
//! Handles SQLite connection pool, migrations, seeding and backup

pub mod backup;
pub mod repository;
pub mod seed;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Database service owning the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the store file with WAL mode and run migrations
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            // 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %db_path.display(),
            "Database connection established (SQLite WAL, busy_timeout=5000ms)"
        );

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory store on a single connection (tests, dry runs)
    ///
    /// Every pooled connection to `:memory:` would be a separate database,
    /// so the pool is pinned to one connection that never expires.
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory_runs_migrations() {
        let db = DbService::open_in_memory().await.unwrap();
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('product', 'order_line') ORDER BY name",
        )
        .fetch_all(&db.pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["order_line", "product"]);
    }

    #[tokio::test]
    async fn test_file_store_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cafe.db");
        let db = DbService::new(&path).await.unwrap();
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&db.pool).await.unwrap();
        assert_eq!(one, 1);
        assert!(path.exists());
        db.pool.close().await;
    }

    #[tokio::test]
    async fn test_quantity_check_constraint() {
        let db = DbService::open_in_memory().await.unwrap();
        sqlx::query("INSERT INTO product (name, price, category) VALUES ('Espresso', 60, 'COFFEE')")
            .execute(&db.pool)
            .await
            .unwrap();
        let result = sqlx::query(
            "INSERT INTO order_line (table_no, product_id, quantity) VALUES (1, 1, 0)",
        )
        .execute(&db.pool)
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_price_check_constraint() {
        let db = DbService::open_in_memory().await.unwrap();
        for price in ["0", "-5"] {
            let result = sqlx::query(&format!(
                "INSERT INTO product (name, price, category) VALUES ('Bedava', {price}, 'COFFEE')"
            ))
            .execute(&db.pool)
            .await;
            assert!(result.is_err(), "price {price} accepted");
        }
    }

    #[tokio::test]
    async fn test_foreign_key_enforced() {
        let db = DbService::open_in_memory().await.unwrap();
        let result = sqlx::query(
            "INSERT INTO order_line (table_no, product_id, quantity) VALUES (1, 999, 1)",
        )
        .execute(&db.pool)
        .await;
        assert!(result.is_err());
    }
}
