use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::modules::progress::core::update::SubmitOutcome;
use crate::modules::progress::use_cases::submit_update::command::SubmitUpdate;
use crate::modules::progress::use_cases::submit_update::handler::ApplicationError;
use crate::modules::progress::use_cases::submit_update::normalize::ValidationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitUpdateResponse {
    pub ok: bool,
    pub mode: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
struct MissingFieldsBody {
    message: &'static str,
    need: [&'static str; 4],
    got: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: "Invalid JSON body",
                    error: None,
                }),
            )
                .into_response();
        }
    };

    let command = SubmitUpdate::from_body(&body, Utc::now().timestamp_millis());

    match state.submit_handler.handle(command).await {
        Ok(outcome) => {
            let (mode, message) = match outcome {
                SubmitOutcome::SameDayAppend => {
                    ("same_day_append", "Same day updated: module added")
                }
                SubmitOutcome::NewDayRow => ("new_day_row", "New day row created"),
            };
            Json(SubmitUpdateResponse {
                ok: true,
                mode,
                message,
            })
            .into_response()
        }
        Err(ApplicationError::Validation(ValidationError::MissingFields)) => (
            StatusCode::BAD_REQUEST,
            Json(MissingFieldsBody {
                message: "Missing required fields",
                need: ["date", "name", "email", "module"],
                got: body,
            }),
        )
            .into_response(),
        Err(ApplicationError::Validation(ValidationError::InvalidEmail)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: "Invalid email address.",
                error: None,
            }),
        )
            .into_response(),
        Err(ApplicationError::Storage(err)) => {
            tracing::error!(error = %err, "POST /api/updates failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Failed to save update",
                    error: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}
