//! Joke dispatch
//!
//! Resolves a requested joke kind into one joke string, either by calling an
//! external provider or by drawing a random joke from the store.

use crate::config::ProviderConfig;
use crate::error::AppError;
use crate::jokes::JokeDb;
use crate::providers;
use rand::Rng;
use std::str::FromStr;
use std::sync::Arc;

/// Source a joke can be served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeKind {
    /// Random joke from the Chuck Norris API
    Chuck,
    /// Random joke from the dad joke API
    Dad,
    /// Random joke from the store of user-submitted jokes
    Own,
}

impl FromStr for JokeKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Chuck" => Ok(JokeKind::Chuck),
            "Dad" => Ok(JokeKind::Dad),
            "Own" => Ok(JokeKind::Own),
            other => Err(AppError::UnknownKind(other.to_string())),
        }
    }
}

/// Source of indices for random selection
///
/// Injectable so tests can assert deterministic selection.
pub trait IndexPicker: Send + Sync {
    /// Pick an index uniformly over `[0, len)`
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Default picker backed by the thread-local RNG
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Resolves joke requests against the external providers and the store
pub struct JokeDispatcher {
    client: reqwest::Client,
    picker: Arc<dyn IndexPicker>,
    chuck_base_url: String,
    dad_base_url: String,
}

impl JokeDispatcher {
    /// Create a dispatcher with the default random picker
    pub fn new(providers: &ProviderConfig) -> Self {
        Self::with_picker(providers, Arc::new(RandomPicker))
    }

    /// Create a dispatcher with a custom index picker
    pub fn with_picker(providers: &ProviderConfig, picker: Arc<dyn IndexPicker>) -> Self {
        Self {
            client: reqwest::Client::new(),
            picker,
            chuck_base_url: providers.chuck_base_url.clone(),
            dad_base_url: providers.dad_base_url.clone(),
        }
    }

    /// Resolve a joke kind into one joke string
    ///
    /// # Errors
    /// * `AppError::Provider` if an external provider call fails
    /// * `AppError::NoJokesStored` if `Own` is requested against an empty store
    /// * `AppError::Database` if the store cannot be read
    pub async fn dispatch(&self, kind: JokeKind, db: &JokeDb) -> Result<String, AppError> {
        match kind {
            JokeKind::Chuck => providers::fetch_chuck_joke(&self.client, &self.chuck_base_url).await,
            JokeKind::Dad => providers::fetch_dad_joke(&self.client, &self.dad_base_url).await,
            JokeKind::Own => {
                let jokes = db.list_all().await?;
                if jokes.is_empty() {
                    return Err(AppError::NoJokesStored);
                }

                let index = self.picker.pick_index(jokes.len());
                let joke = jokes.get(index).ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Picker returned index {} for {} jokes",
                        index,
                        jokes.len()
                    ))
                })?;

                Ok(joke.text.clone())
            }
        }
    }
}
