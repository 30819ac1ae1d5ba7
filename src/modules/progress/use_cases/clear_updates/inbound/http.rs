use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ClearUpdatesResponse {
    pub ok: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.clear_all().await {
        Ok(deleted_count) => Json(ClearUpdatesResponse {
            ok: true,
            deleted_count,
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "DELETE /api/updates failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Failed to clear updates",
                }),
            )
                .into_response()
        }
    }
}
