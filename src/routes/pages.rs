use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Local;

use crate::{error::AppError, models::report::VehicleReport, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entry_form))
        .route("/view_logs", get(view_logs))
        .route("/view_by_date/:entry_date", get(view_by_date))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    today: String,
}

async fn entry_form() -> impl IntoResponse {
    AskamaTemplateResponse::into_response(IndexTemplate {
        today: Local::now().format("%Y-%m-%d").to_string(),
    })
}

#[derive(Clone)]
struct ReportRow {
    id: i64,
    city: String,
    sr_no: String,
    vrn: String,
    model: String,
    entry_date: String,
    in_time: String,
    out_date: String,
    out_time: String,
    remarks: String,
}

#[derive(Template)]
#[template(path = "logs.html")]
struct LogsTemplate {
    entries: Vec<ReportRow>,
    has_filter: bool,
    filter_date: String,
}

async fn view_logs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state.reports.list_all().await?;
    Ok(AskamaTemplateResponse::into_response(LogsTemplate {
        entries: entries.into_iter().map(present).collect(),
        has_filter: false,
        filter_date: String::new(),
    }))
}

async fn view_by_date(
    State(state): State<AppState>,
    Path(entry_date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.reports.list_by_date(&entry_date).await?;
    Ok(AskamaTemplateResponse::into_response(LogsTemplate {
        entries: entries.into_iter().map(present).collect(),
        has_filter: true,
        filter_date: entry_date,
    }))
}

fn present(report: VehicleReport) -> ReportRow {
    ReportRow {
        id: report.id,
        city: report.city,
        sr_no: report
            .sr_no
            .map(|n| n.to_string())
            .unwrap_or_else(|| "–".into()),
        vrn: display_text(report.vrn),
        model: display_text(report.model),
        entry_date: display_text(report.entry_date),
        in_time: display_text(report.in_time),
        out_date: display_text(report.out_date),
        out_time: display_text(report.out_time),
        remarks: display_text(report.remarks),
    }
}

fn display_text(value: Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => "–".into(),
    }
}
