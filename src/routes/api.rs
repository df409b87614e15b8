use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::debug;

use crate::{error::AppError, models::report::NewReport, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save_reports", post(save_reports))
        .route("/save_reports_row", post(save_reports_row))
}

async fn save_reports(
    State(state): State<AppState>,
    Json(entries): Json<Vec<NewReport>>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("received {} report entries", entries.len());
    state.reports.save_reports(&entries).await?;
    Ok(Json(json!({ "status": "success" })))
}

async fn save_reports_row(
    State(state): State<AppState>,
    payload: Option<Json<NewReport>>,
) -> Result<Response, AppError> {
    let Some(Json(entry)) = payload else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "No data received" })),
        )
            .into_response());
    };
    state.reports.save_report(&entry).await?;
    Ok(Json(json!({ "status": "Row saved" })).into_response())
}
