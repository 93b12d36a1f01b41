//! Result ordering
//!
//! Sort options offered by the sort control and the comparator that applies
//! them to an in-memory result list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::movie::Movie;
use crate::Error;

/// Sort option selected in the UI and persisted under the `sort` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SortOrder {
    /// Keep the order returned by the search request
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "yearAsc")]
    YearAsc,
    #[serde(rename = "yearDesc")]
    YearDesc,
    #[serde(rename = "ratingAsc")]
    RatingAsc,
    #[serde(rename = "ratingDesc")]
    RatingDesc,
}

impl SortOrder {
    /// All options, in the order the sort control lists them
    pub const ALL: [SortOrder; 5] = [
        SortOrder::None,
        SortOrder::YearAsc,
        SortOrder::YearDesc,
        SortOrder::RatingAsc,
        SortOrder::RatingDesc,
    ];

    /// Stored/query-string key
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::YearAsc => "yearAsc",
            SortOrder::YearDesc => "yearDesc",
            SortOrder::RatingAsc => "ratingAsc",
            SortOrder::RatingDesc => "ratingDesc",
        }
    }

    /// Human readable label for the sort control
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::None => "None",
            SortOrder::YearAsc => "Year (Ascending)",
            SortOrder::YearDesc => "Year (Descending)",
            SortOrder::RatingAsc => "Rating (Ascending)",
            SortOrder::RatingDesc => "Rating (Descending)",
        }
    }

    /// Parse a persisted value, treating anything unknown as `None`
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Compare two movies under this option
    ///
    /// Values that do not parse (`N/A`) order after every parseable value in
    /// both directions.
    pub fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortOrder::None => Ordering::Equal,
            SortOrder::YearAsc => compare_present(a.year_value(), b.year_value(), false),
            SortOrder::YearDesc => compare_present(a.year_value(), b.year_value(), true),
            SortOrder::RatingAsc => compare_present(a.rating_value(), b.rating_value(), false),
            SortOrder::RatingDesc => compare_present(a.rating_value(), b.rating_value(), true),
        }
    }

    /// Stable in-place sort of a result list
    pub fn apply(self, movies: &mut [Movie]) {
        if self == SortOrder::None {
            return;
        }
        movies.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_present<T: PartialOrd>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.key() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown sort option: {}", s)))
    }
}
