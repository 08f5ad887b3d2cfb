//! HTTP surface for the tasklist backend.
//!
//! Exposes the task endpoints over axum:
//!
//! - `POST /tasks` — create a task
//! - `GET /tasks` — list all tasks
//! - `GET /tasks/{id}` — fetch a task
//! - `PUT /tasks/{id}` — partially update a task
//! - `DELETE /tasks/{id}` — delete a task
//!
//! Handlers translate use-case outcomes into status codes and the shared
//! error envelope; all business rules stay behind the input gateway.

mod error;
mod tasks;

pub use error::{ApiError, ApiSubError};

use axum::Router;
use axum::http::{Method, Uri};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::task::ports::TaskInputGateway;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Task use case consumed by the handlers.
    pub tasks: Arc<dyn TaskInputGateway>,
}

/// Builds the application router with all task routes and layers.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/:id",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task)
                .fallback(method_not_allowed),
        )
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn unknown_route(method: Method, uri: Uri) -> ApiError {
    ApiError::unknown_route(format!("Endpoint '{method} {uri}' not found"))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!(
        "HTTP method '{method}' is not supported for '{uri}'"
    ))
}
