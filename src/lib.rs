//! album-manager library
//!
//! A small web application for managing a collection of albums through
//! the browser: list, create, update, delete. Server-rendered HTML over
//! a single SQLite table.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod forms;
pub mod repository;
pub mod storage;

use repository::AlbumRepository;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Album repository backing all CRUD routes
    pub albums: AlbumRepository,
}

impl AppState {
    /// Create new application state
    pub fn new(albums: AlbumRepository) -> Self {
        Self { albums }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/album", get(api::album_list))
        .route(
            "/album/create",
            get(api::create_form).post(api::create_handle),
        )
        .route(
            "/album/update/:id",
            get(api::update_form).post(api::update_handle),
        )
        .route(
            "/album/delete/:id",
            get(api::delete_form).post(api::delete_handle),
        )
        .route("/static/style.css", get(api::serve_stylesheet))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
