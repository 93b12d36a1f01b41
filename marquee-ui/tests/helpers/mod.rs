//! Shared test fixtures: a local mock of the OMDb API and app setup

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use marquee_ui::omdb::OmdbClient;
use marquee_ui::{build_router, AppState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_API_KEY: &str = "testkey";

/// Request counters of the mock server
#[derive(Clone, Default)]
pub struct MockCounters {
    pub searches: Arc<AtomicUsize>,
    pub lookups: Arc<AtomicUsize>,
}

impl MockCounters {
    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

/// Running mock OMDb endpoint
pub struct MockOmdb {
    pub base_url: String,
    pub counters: MockCounters,
}

fn detail(id: &str, title: &str, year: &str, genre: &str, rating: &str, poster: &str) -> Value {
    json!({
        "Title": title,
        "Year": year,
        "Rated": "R",
        "Genre": genre,
        "Director": "Someone",
        "Poster": poster,
        "imdbRating": rating,
        "imdbID": id,
        "Type": "movie",
        "Response": "True"
    })
}

fn catalog() -> HashMap<&'static str, Value> {
    HashMap::from([
        (
            "tt1000001",
            detail("tt1000001", "Heat", "1995", "Action, Crime, Drama", "8.3", "https://img.example/heat.jpg"),
        ),
        (
            "tt1000002",
            detail("tt1000002", "The Heat", "2013", "Action, Comedy, Crime", "6.6", "https://img.example/the-heat.jpg"),
        ),
        (
            "tt1000003",
            detail("tt1000003", "White Heat", "1949", "Crime, Drama, Film-Noir", "8.1", "N/A"),
        ),
        (
            "tt1000004",
            detail("tt1000004", "Heat Wave", "2022", "Thriller", "N/A", "https://img.example/heat-wave.jpg"),
        ),
    ])
}

fn hit(id: &str, title: &str) -> Value {
    json!({"Title": title, "Year": "2000", "imdbID": id, "Type": "movie", "Poster": "N/A"})
}

fn search_hits(query: &str) -> Option<Vec<Value>> {
    match query {
        "heat" => Some(vec![
            hit("tt1000001", "Heat"),
            hit("tt1000002", "The Heat"),
            hit("tt1000001", "Heat"),
            hit("tt1000003", "White Heat"),
            hit("tt1000004", "Heat Wave"),
        ]),
        "broken" => Some(vec![hit("tt1000001", "Heat"), hit("tt9999999", "Broken")]),
        _ => None,
    }
}

async fn omdb_handler(
    State(counters): State<MockCounters>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("apikey").map(String::as_str) != Some(TEST_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"Response": "False", "Error": "Invalid API key!"})),
        )
            .into_response();
    }

    if let Some(query) = params.get("s") {
        counters.searches.fetch_add(1, Ordering::SeqCst);

        if params.get("type").map(String::as_str) != Some("movie")
            || params.get("page").map(String::as_str) != Some("1")
        {
            return StatusCode::BAD_REQUEST.into_response();
        }

        return match search_hits(query) {
            Some(hits) => Json(json!({
                "Search": hits,
                "totalResults": hits.len().to_string(),
                "Response": "True"
            }))
            .into_response(),
            None => Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
        };
    }

    if let Some(id) = params.get("i") {
        counters.lookups.fetch_add(1, Ordering::SeqCst);

        if id == "tt9999999" {
            return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
        }

        return match catalog().remove(id.as_str()) {
            Some(movie) => Json(movie).into_response(),
            None => Json(json!({"Response": "False", "Error": "Incorrect IMDb ID."})).into_response(),
        };
    }

    StatusCode::BAD_REQUEST.into_response()
}

/// Start a mock OMDb server on an ephemeral local port
pub async fn spawn_mock_omdb() -> MockOmdb {
    let counters = MockCounters::default();
    let app = Router::new()
        .route("/", get(omdb_handler))
        .with_state(counters.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockOmdb {
        base_url: format!("http://{}/", addr),
        counters,
    }
}

/// In-memory preferences database
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    marquee_common::db::create_schema(&pool).await.unwrap();
    pool
}

/// App wired to a fresh mock OMDb and database
pub async fn setup_app(result_count: usize) -> (Router, MockOmdb) {
    let mock = spawn_mock_omdb().await;
    let client = OmdbClient::new(mock.base_url.clone(), TEST_API_KEY).unwrap();
    let state = AppState::new(setup_test_db().await, client, result_count).unwrap();
    (build_router(state), mock)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

pub async fn body_json(body: Body) -> Value {
    serde_json::from_str(&body_text(body).await).expect("Should parse JSON")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
