//! Persisted user preferences
//!
//! Favorites and the sort option survive restarts as two rows of the
//! `settings` table: `favorites` holds a JSON object, `sort` holds the option
//! key.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::db::{get_setting_raw, set_setting};
use crate::{Error, Favorites, Result, SortOrder};

/// Settings key holding the favorites JSON object
pub const FAVORITES_KEY: &str = "favorites";

/// Settings key holding the sort option
pub const SORT_KEY: &str = "sort";

/// Read/write access to favorites and sort preference
#[derive(Clone)]
pub struct PreferenceStore {
    db: SqlitePool,
    // Serializes read-modify-write of the favorites blob
    favorites_lock: Arc<Mutex<()>>,
}

impl PreferenceStore {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            favorites_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored favorites; empty when nothing was saved yet
    ///
    /// A blob that no longer parses is logged and treated as empty.
    pub async fn load_favorites(&self) -> Result<Favorites> {
        let Some(raw) = get_setting_raw(&self.db, FAVORITES_KEY).await? else {
            return Ok(Favorites::new());
        };

        match serde_json::from_str(&raw) {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                warn!("Discarding unreadable favorites blob: {}", e);
                Ok(Favorites::new())
            }
        }
    }

    pub async fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
        let json = serde_json::to_string(favorites)?;
        set_setting(&self.db, FAVORITES_KEY, json).await
    }

    /// Flip and persist the favorite flag for `imdb_id`, returning the new value
    pub async fn toggle_favorite(&self, imdb_id: &str) -> Result<bool> {
        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            return Err(Error::InvalidInput("Empty movie ID".to_string()));
        }

        let _guard = self.favorites_lock.lock().await;
        let mut favorites = self.load_favorites().await?;
        let is_favorite = favorites.toggle(imdb_id);
        self.save_favorites(&favorites).await?;

        debug!(imdb_id = %imdb_id, is_favorite, "Toggled favorite");
        Ok(is_favorite)
    }

    /// Stored sort option; unknown or missing values load as `None`
    pub async fn load_sort(&self) -> Result<SortOrder> {
        let stored = get_setting_raw(&self.db, SORT_KEY).await?;
        Ok(stored
            .as_deref()
            .map(SortOrder::from_stored)
            .unwrap_or_default())
    }

    pub async fn save_sort(&self, order: SortOrder) -> Result<()> {
        set_setting(&self.db, SORT_KEY, order).await
    }
}
