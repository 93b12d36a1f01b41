//! HTTP handlers for marquee-ui

pub mod favorites;
pub mod health;
pub mod search;
pub mod sort;
pub mod ui;

pub use favorites::{list_favorites, toggle_favorite};
pub use health::health_routes;
pub use search::search_movies;
pub use sort::{get_sort, set_sort};
pub use ui::{serve_index, submit_favorite, submit_search, submit_sort};
