pub mod api;
pub mod pages;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(api::router())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
