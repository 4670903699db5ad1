pub mod applications;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(applications::index_page))
        .route("/health", get(health::health_handler))
        .route("/applications", get(applications::list_applications))
        .route("/add_update_job", post(applications::add_update_job))
        .route("/delete_job", post(applications::delete_job))
        .with_state(state)
}
