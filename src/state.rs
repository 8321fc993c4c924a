//! Application state
//!
//! The explicitly constructed service object handed to route handlers.

use crate::config::Config;
use crate::dispatch::JokeDispatcher;
use crate::error::AppError;
use crate::jokes::JokeDb;
use std::sync::Arc;

/// Shared service state: the store handle and the dispatcher
///
/// Nothing in here mutates in-process; the database is the system of record,
/// so handlers share the state as a plain `Arc` without locking.
pub struct AppState {
    /// Joke persistence
    pub db: JokeDb,
    /// Joke retrieval dispatch
    pub dispatcher: JokeDispatcher,
}

impl AppState {
    /// Connect the store and build the service state from configuration
    pub async fn new(config: &Config) -> Result<Arc<Self>, AppError> {
        let db = JokeDb::new(&config.database.path).await?;
        let dispatcher = JokeDispatcher::new(&config.providers);
        Ok(Arc::new(Self { db, dispatcher }))
    }

    /// Build state from already-constructed parts
    pub fn from_parts(db: JokeDb, dispatcher: JokeDispatcher) -> Arc<Self> {
        Arc::new(Self { db, dispatcher })
    }
}
