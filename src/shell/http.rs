use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::progress::use_cases::clear_updates::inbound::http as clear_http;
use crate::modules::progress::use_cases::list_updates::inbound::http as list_http;
use crate::modules::progress::use_cases::submit_update::inbound::http as submit_http;
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "Server OK"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(
            "/api/updates",
            post(submit_http::handle)
                .get(list_http::handle)
                .delete(clear_http::handle),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
