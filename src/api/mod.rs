//! API module
//!
//! Contains HTTP request handlers for the joke endpoints

pub mod docs;
pub mod jokes;
