use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "GET /api/updates failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Failed to load updates",
                }),
            )
                .into_response()
        }
    }
}
