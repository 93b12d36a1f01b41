//! Search orchestration
//!
//! One search-by-title request followed by a parallel lookup of the top hits.
//! The lookups are joined all-or-nothing: a single failed lookup fails the
//! whole search. The most recent result list is kept so that re-sorting and
//! favorite toggles re-render without another round trip.

use std::collections::HashSet;

use futures::future::try_join_all;
use marquee_common::{Movie, SearchHit};
use tokio::sync::RwLock;
use tracing::info;

use crate::omdb::{OmdbClient, OmdbError};

/// Result list of one search, in API order
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: String,
    pub movies: Vec<Movie>,
}

/// Fetch orchestrator plus the last result list
pub struct MovieSearch {
    client: OmdbClient,
    result_count: usize,
    last: RwLock<Option<SearchResults>>,
}

impl MovieSearch {
    pub fn new(client: OmdbClient, result_count: usize) -> Self {
        Self {
            client,
            result_count,
            last: RwLock::new(None),
        }
    }

    /// Run a fresh search and remember its results
    pub async fn run(&self, query: &str) -> Result<Vec<Movie>, OmdbError> {
        let query = query.trim();
        let movies = fetch_movies(&self.client, query, self.result_count).await?;

        *self.last.write().await = Some(SearchResults {
            query: query.to_string(),
            movies: movies.clone(),
        });

        Ok(movies)
    }

    /// Results of the last search if it was for `query`
    pub async fn cached(&self, query: &str) -> Option<Vec<Movie>> {
        let query = query.trim();
        self.last
            .read()
            .await
            .as_ref()
            .filter(|results| results.query == query)
            .map(|results| results.movies.clone())
    }

    /// Cached results for `query`, searching only on a miss
    pub async fn cached_or_run(&self, query: &str) -> Result<Vec<Movie>, OmdbError> {
        match self.cached(query).await {
            Some(movies) => Ok(movies),
            None => self.run(query).await,
        }
    }
}

/// Search by title, then look up details of the first `limit` hits in parallel
///
/// A blank query never reaches the API and yields no results.
pub async fn fetch_movies(
    client: &OmdbClient,
    query: &str,
    limit: usize,
) -> Result<Vec<Movie>, OmdbError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let hits = client.search(query).await?;
    let ids = top_unique_ids(&hits, limit);

    let movies = try_join_all(ids.iter().map(|id| client.lookup(id))).await?;

    info!(query = %query, count = movies.len(), "Search results ready");

    Ok(movies)
}

/// First `limit` distinct IDs, in search order
fn top_unique_ids(hits: &[SearchHit], limit: usize) -> Vec<&str> {
    let mut seen = HashSet::new();
    hits.iter()
        .map(|hit| hit.imdb_id.as_str())
        .filter(|id| seen.insert(*id))
        .take(limit)
        .collect()
}
