use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::application::JobApplication;
use crate::state::AppState;

/// GET /
/// The tracker page. Search/filter and the package sort run client-side
/// against a snapshot fetched from `/applications`.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// GET /applications
/// All records, in file order.
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let applications = state.store.lock().await.load_all()?;
    Ok(Json(applications))
}

/// POST /add_update_job
/// Upserts the submitted record: replaces in place by title, else appends.
pub async fn add_update_job(
    State(state): State<AppState>,
    Json(application): Json<JobApplication>,
) -> Result<Json<Value>, AppError> {
    state.store.lock().await.upsert(application)?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "Job Title")]
    pub title: String,
}

/// POST /delete_job
/// Removes the record with the given title; absent titles are a no-op.
pub async fn delete_job(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<Value>, AppError> {
    state.store.lock().await.delete(&req.title)?;
    Ok(Json(json!({ "success": true })))
}
