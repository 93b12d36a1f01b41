//! Movie records as delivered by the OMDb API
//!
//! Field names follow the OMDb JSON payload so records round-trip through the
//! JSON API unchanged. Year and rating stay string-encoded; numeric views are
//! derived on demand for sorting.

use serde::{Deserialize, Serialize};

/// IMDb title page prefix used for card links
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Shown in place of posters the API reports as `N/A`
pub const NO_POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/300x100?text=No+Poster+Available";

/// OMDb marker for an absent value
pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Movie details from a lookup-by-ID request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,

    /// External (IMDb) identifier, e.g. `tt0111161`
    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    /// Comma separated genre list
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,

    /// Release year, may be a range for series (`2005–2008`)
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,

    /// Decimal rating out of 10, or `N/A`
    #[serde(rename = "imdbRating", default = "not_available")]
    pub imdb_rating: String,

    /// Poster URL, or `N/A`
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
}

impl Movie {
    /// Link to the title page on IMDb
    pub fn imdb_url(&self) -> String {
        format!("{}{}/", IMDB_TITLE_URL, self.imdb_id)
    }

    /// Poster URL, falling back to the placeholder image
    ///
    /// Only `http(s)` URLs are passed through. Quotes, parentheses and
    /// whitespace are percent-encoded so the value cannot end an attribute or
    /// a CSS `url()` it is placed in.
    pub fn poster_url(&self) -> String {
        let poster = self.poster.trim();
        let lower = poster.to_ascii_lowercase();
        if !(lower.starts_with("https://") || lower.starts_with("http://")) {
            return NO_POSTER_PLACEHOLDER.to_string();
        }

        let mut url = String::with_capacity(poster.len());
        for c in poster.chars() {
            match c {
                '\'' => url.push_str("%27"),
                '"' => url.push_str("%22"),
                '(' => url.push_str("%28"),
                ')' => url.push_str("%29"),
                c if c.is_whitespace() => {
                    let mut buf = [0u8; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        url.push_str(&format!("%{:02X}", byte));
                    }
                }
                c => url.push(c),
            }
        }
        url
    }

    /// Card caption: `(Year) - Genre - IMDb Rating: x`
    pub fn caption(&self) -> String {
        format!(
            "({}) - {} - IMDb Rating: {}",
            self.year, self.genre, self.imdb_rating
        )
    }

    /// Leading integer of the year field
    ///
    /// `"1999"` → 1999, `"2005–2008"` → 2005, `"N/A"` → None
    pub fn year_value(&self) -> Option<i64> {
        let trimmed = self.year.trim_start();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        trimmed[..end].parse().ok()
    }

    /// Rating parsed as a decimal
    pub fn rating_value(&self) -> Option<f64> {
        self.imdb_rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
    }
}

/// One entry of a search-by-title response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchHit {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year", default = "not_available")]
    pub year: String,

    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    /// `movie`, `series` or `episode`
    #[serde(rename = "Type", default)]
    pub kind: String,

    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
}
