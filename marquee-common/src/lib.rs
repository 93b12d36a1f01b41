//! # Marquee Common Library
//!
//! Shared code for the Marquee movie search service including:
//! - Movie records as delivered by the OMDb API
//! - Sort options and the result comparator
//! - Favorites map and persisted preferences
//! - Database initialization and key/value settings access
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod favorites;
pub mod movie;
pub mod sort;
pub mod store;

pub use error::{Error, Result};
pub use favorites::Favorites;
pub use movie::{Movie, SearchHit};
pub use sort::SortOrder;
pub use store::PreferenceStore;
