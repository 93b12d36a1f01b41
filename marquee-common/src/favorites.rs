//! Favorite flags keyed by IMDb ID

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from external ID to favorite flag
///
/// Serialized as a flat JSON object (`{"tt0113277": true}`), the format
/// persisted under the `favorites` key. Toggled-off entries stay in the map as
/// `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Favorites(BTreeMap<String, bool>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent IDs are not favorites
    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.0.get(imdb_id).copied().unwrap_or(false)
    }

    /// Flip the flag for `imdb_id`, returning the new value
    pub fn toggle(&mut self, imdb_id: &str) -> bool {
        let flag = self.0.entry(imdb_id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }
}
