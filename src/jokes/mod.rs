//! Joke storage module
//!
//! Handles validation and persistence of user-submitted jokes using a
//! SQLite database.

pub mod db;
pub mod models;

pub use db::JokeDb;
pub use models::{Joke, JokeUpdate, NewJoke};
