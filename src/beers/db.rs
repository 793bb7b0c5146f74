//! Beer database operations
//!
//! Handles all database interactions for the beers table. Absence of a row
//! is reported as `None` at this layer; turning it into an error is the
//! service layer's job.

use crate::beers::models::{Beer, NewBeer};
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Database connection pool for beer stock operations
#[derive(Clone)]
pub struct BeerDb {
    pool: SqlitePool,
}

impl BeerDb {
    /// Initialize database connection pool
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(BeerDb)` if successful
    /// * `Err(AppError)` if connection failed
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        // Ensure parent directory exists
        if let Some(parent) = PathBuf::from(db_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
            })?;
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e))
            })?;

        info!("Connected to SQLite database at: {}", db_path);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_beers.sql");

        // Execute each statement separately; SQLite tolerates the comments
        for statement in migration_sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Migration failed: {}", e)))?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Insert a new beer and return the stored row with its assigned id
    pub async fn insert(&self, new_beer: &NewBeer) -> Result<Beer, AppError> {
        let now = chrono::Utc::now().timestamp();
        let result = sqlx::query(
            "INSERT INTO beers (name, brand, max, quantity, beer_type, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_beer.name)
        .bind(&new_beer.brand)
        .bind(new_beer.max)
        .bind(new_beer.quantity)
        .bind(new_beer.beer_type.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to insert beer: {}", e)))?;

        let id = result.last_insert_rowid();
        let beer = self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("Beer missing after insert: {}", id))
        })?;

        debug!("Inserted beer {} ({})", beer.id, beer.name);
        Ok(beer)
    }

    /// Get a beer by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Beer>, AppError> {
        let beer = sqlx::query_as::<_, Beer>(
            "SELECT id, name, brand, max, quantity, beer_type, created_at, updated_at \
             FROM beers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch beer: {}", e)))?;

        Ok(beer)
    }

    /// Get a beer by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, AppError> {
        let beer = sqlx::query_as::<_, Beer>(
            "SELECT id, name, brand, max, quantity, beer_type, created_at, updated_at \
             FROM beers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch beer by name: {}", e)))?;

        Ok(beer)
    }

    /// Get all beers in storage order
    pub async fn list_all(&self) -> Result<Vec<Beer>, AppError> {
        let beers = sqlx::query_as::<_, Beer>(
            "SELECT id, name, brand, max, quantity, beer_type, created_at, updated_at \
             FROM beers ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch beers: {}", e)))?;

        Ok(beers)
    }

    /// Set the quantity of a beer and refresh its updated_at timestamp
    pub async fn update_quantity(&self, id: i64, quantity: i64) -> Result<(), AppError> {
        let updated_at = chrono::Utc::now().timestamp();
        sqlx::query("UPDATE beers SET quantity = ?, updated_at = ? WHERE id = ?")
            .bind(quantity)
            .bind(updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to update beer quantity: {}", e))
            })?;

        debug!("Updated quantity of beer {} to {}", id, quantity);
        Ok(())
    }

    /// Delete a beer by id
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM beers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to delete beer: {}", e)))?;

        debug!("Deleted beer {}", id);
        Ok(result.rows_affected() > 0)
    }

    /// Get the database pool (for advanced operations if needed)
    #[allow(dead_code)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
