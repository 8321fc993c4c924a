//! Joke database operations
//!
//! Handles all database interactions for stored jokes.

use crate::error::AppError;
use crate::jokes::models::{Joke, JokeUpdate, NewJoke};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Database connection pool for joke storage
pub struct JokeDb {
    pool: SqlitePool,
}

impl JokeDb {
    /// Initialize database connection pool
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(JokeDb)` if successful
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
            .create_if_missing(true);

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
        let migration_sql = include_str!("../../migrations/001_create_jokes.sql");

        // Drop comment lines, then execute each statement separately
        let cleaned_sql: String = migration_sql
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("--"))
            .collect::<Vec<_>>()
            .join(" ");

        for statement in cleaned_sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Migration failed: {}", e)))?;
        }

        Ok(())
    }

    /// Validate and persist a new joke, assigning it a fresh ID
    pub async fn create(&self, submission: NewJoke) -> Result<Joke, AppError> {
        let joke = submission.into_joke().map_err(AppError::Validation)?;

        sqlx::query("INSERT INTO jokes (id, text, author, score, category) VALUES (?, ?, ?, ?, ?)")
            .bind(&joke.id)
            .bind(&joke.text)
            .bind(&joke.author)
            .bind(joke.score)
            .bind(&joke.category)
            .execute(&self.pool)
            .await?;

        debug!("Created joke: {}", joke.id);
        Ok(joke)
    }

    /// Get every stored joke
    ///
    /// Callers must not rely on any particular ordering.
    pub async fn list_all(&self) -> Result<Vec<Joke>, AppError> {
        let jokes =
            sqlx::query_as::<_, Joke>("SELECT id, text, author, score, category FROM jokes")
                .fetch_all(&self.pool)
                .await?;

        Ok(jokes)
    }

    /// Get a joke by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Joke>, AppError> {
        let joke = sqlx::query_as::<_, Joke>(
            "SELECT id, text, author, score, category FROM jokes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(joke)
    }

    /// Apply a partial update to a joke
    ///
    /// Only the fields present in `patch` change; each present field is
    /// re-validated. An empty patch is a no-op that still succeeds.
    pub async fn update(&self, id: &str, patch: JokeUpdate) -> Result<Joke, AppError> {
        patch.validate().map_err(AppError::Validation)?;

        let mut joke = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::JokeNotFound(id.to_string()))?;

        if patch.is_empty() {
            return Ok(joke);
        }

        if let Some(text) = patch.text {
            joke.text = text;
        }
        if let Some(author) = patch.author {
            joke.author = author;
        }
        if let Some(score) = patch.score {
            joke.score = score;
        }
        if let Some(category) = patch.category {
            joke.category = category;
        }

        sqlx::query("UPDATE jokes SET text = ?, author = ?, score = ?, category = ? WHERE id = ?")
            .bind(&joke.text)
            .bind(&joke.author)
            .bind(joke.score)
            .bind(&joke.category)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Updated joke: {}", id);
        Ok(joke)
    }

    /// Delete a joke by ID, returning its prior state
    pub async fn delete_by_id(&self, id: &str) -> Result<Joke, AppError> {
        let joke = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::JokeNotFound(id.to_string()))?;

        sqlx::query("DELETE FROM jokes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted joke: {}", id);
        Ok(joke)
    }

    /// Get the database pool (for advanced operations if needed)
    #[allow(dead_code)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
