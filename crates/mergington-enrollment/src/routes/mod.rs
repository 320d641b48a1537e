//! HTTP surface of the enrollment store.
//!
//! - `GET    /activities` lists every activity
//! - `POST   /activities/{name}/signup?email=` enrolls a student
//! - `DELETE /activities/{name}/remove?email=` removes a student

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::store::ActivityStore;

pub mod activities;
pub mod error;

pub use error::ApiError;

/// Build the activities router around a shared store
pub fn router(store: ActivityStore) -> Router {
    Router::new()
        .route("/activities", get(activities::list_handler))
        .route("/activities/{name}/signup", post(activities::signup_handler))
        .route("/activities/{name}/remove", delete(activities::remove_handler))
        .with_state(store)
}
