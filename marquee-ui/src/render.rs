//! Server-side rendering of the search page
//!
//! The page holds the search input, the sort control and the result grid.
//! Values are HTML-escaped by the template engine.

use marquee_common::{Favorites, Movie, SortOrder};
use minijinja::{context, Environment};
use serde::Serialize;

const INDEX_TEMPLATE: &str = "index.html";
const INDEX_HTML: &str = include_str!("../templates/index.html");

/// One result card
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub imdb_id: String,
    pub title: String,
    pub imdb_url: String,
    pub poster_url: String,
    pub caption: String,
    pub is_favorite: bool,
}

impl CardView {
    pub fn new(movie: &Movie, favorites: &Favorites) -> Self {
        Self {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            imdb_url: movie.imdb_url(),
            poster_url: movie.poster_url(),
            caption: movie.caption(),
            is_favorite: favorites.is_favorite(&movie.imdb_id),
        }
    }
}

/// Entry of the sort control
#[derive(Debug, Clone, Serialize)]
pub struct SortOptionView {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the page template needs
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub query: String,
    pub sort: SortOrder,
    /// Whether a search ran for `query`; drives the empty-state message
    pub searched: bool,
    pub cards: Vec<CardView>,
    pub error: Option<String>,
}

impl PageView {
    /// Page for a finished search: sorted cards with favorite flags
    pub fn results(
        query: &str,
        mut movies: Vec<Movie>,
        sort: SortOrder,
        favorites: &Favorites,
    ) -> Self {
        sort.apply(&mut movies);
        Self {
            query: query.to_string(),
            sort,
            searched: true,
            cards: movies.iter().map(|m| CardView::new(m, favorites)).collect(),
            error: None,
        }
    }

    /// Page showing a failed search
    pub fn failed(query: &str, sort: SortOrder, message: impl Into<String>) -> Self {
        Self {
            query: query.to_string(),
            sort,
            searched: true,
            cards: Vec::new(),
            error: Some(message.into()),
        }
    }

    fn sort_options(&self) -> Vec<SortOptionView> {
        SortOrder::ALL
            .into_iter()
            .map(|order| SortOptionView {
                key: order.key(),
                label: order.label(),
                selected: order == self.sort,
            })
            .collect()
    }
}

/// Template environment, built once at startup
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, INDEX_HTML)?;
        Ok(Self { env })
    }

    pub fn render_page(&self, page: &PageView) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        template.render(context! {
            query => page.query,
            searched => page.searched,
            movies => page.cards,
            sort_options => page.sort_options(),
            error => page.error,
        })
    }
}
