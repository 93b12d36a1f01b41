//! Wire types for OMDb responses that are not plain movie records

use marquee_common::SearchHit;
use serde::Deserialize;

/// Envelope of a search-by-title response
///
/// A failed search (`"Response": "False"`) carries an `Error` message and no
/// `Search` list.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,

    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,

    #[serde(rename = "Response")]
    pub response: String,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchEnvelope {
    pub(crate) fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// Minimal view used to detect a failed lookup before decoding the movie
#[derive(Debug, Deserialize)]
pub(crate) struct LookupStatus {
    #[serde(rename = "Response")]
    pub response: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}
