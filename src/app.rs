//! Full HTTP application: activity routes plus the browser UI.

use std::path::Path;

use axum::{response::Redirect, routing::get, Router};
use mergington_enrollment::ActivityStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Assemble the service around a shared store
pub fn app(store: ActivityStore, static_dir: &Path) -> Router {
    mergington_enrollment::router(store)
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
