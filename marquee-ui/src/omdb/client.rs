//! OMDb API client
//!
//! Two read-only calls: search-by-title and lookup-by-ID.

use marquee_common::{Movie, SearchHit};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{LookupStatus, SearchEnvelope};

const USER_AGENT: &str = concat!("Marquee/", env!("CARGO_PKG_VERSION"));

/// OMDb client errors
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// OMDb API client
pub struct OmdbClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, OmdbError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OmdbError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }


    /// Search movies by title
    ///
    /// Returns the first result page. An API-level failure such as
    /// "Movie not found!" is an empty list, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, OmdbError> {
        tracing::debug!(query = %query, "Searching OMDb");

        let envelope: SearchEnvelope = self
            .get_json(&[("s", query), ("type", "movie"), ("page", "1")])
            .await?;

        if !envelope.is_success() {
            tracing::info!(
                query = %query,
                reason = %envelope.error.as_deref().unwrap_or("unknown"),
                "OMDb search returned no results"
            );
            return Ok(Vec::new());
        }

        tracing::info!(
            query = %query,
            count = envelope.search.len(),
            total = %envelope.total_results.as_deref().unwrap_or("?"),
            "OMDb search complete"
        );

        Ok(envelope.search)
    }

    /// Lookup full details of one movie
    pub async fn lookup(&self, imdb_id: &str) -> Result<Movie, OmdbError> {
        tracing::debug!(imdb_id = %imdb_id, "Looking up movie details");

        let value: serde_json::Value = self.get_json(&[("i", imdb_id)]).await?;

        let status: LookupStatus = serde_json::from_value(value.clone())
            .map_err(|e| OmdbError::ParseError(e.to_string()))?;
        if status
            .response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("false"))
        {
            return Err(OmdbError::MovieNotFound(format!(
                "{} ({})",
                imdb_id,
                status.error.as_deref().unwrap_or("no details")
            )));
        }

        let movie: Movie =
            serde_json::from_value(value).map_err(|e| OmdbError::ParseError(e.to_string()))?;

        tracing::debug!(imdb_id = %imdb_id, title = %movie.title, "Retrieved movie details");

        Ok(movie)
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, OmdbError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| OmdbError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OmdbError::ApiError(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| OmdbError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OmdbClient::new("https://www.omdbapi.com/", "key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = OmdbError::ApiError(401, "Invalid API key!".to_string());
        assert_eq!(err.to_string(), "API error 401: Invalid API key!");

        let err = OmdbError::MovieNotFound("tt0000000".to_string());
        assert_eq!(err.to_string(), "Movie not found: tt0000000");
    }
}
