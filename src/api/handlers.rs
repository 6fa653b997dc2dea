use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    api::{
        types::{ErrorResponse, HealthResponse, SermonPrepRequest, SermonPrepResponse},
        AppState,
    },
    prompts::Mode,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn generate_sermon_prep(
    State(state): State<AppState>,
    payload: Result<Json<SermonPrepRequest>, JsonRejection>,
) -> Result<Json<SermonPrepResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected sermon prep request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details(
                "Invalid request body",
                rejection.body_text(),
            )),
        )
    })?;

    // Whitespace-only passages count as missing.
    let passage = match req.passage {
        Some(p) if !p.trim().is_empty() => p,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Passage is required")),
            ))
        }
    };

    let request_id = Uuid::new_v4().to_string();
    let mode = Mode::from_request(req.mode.as_ref().and_then(|m| m.as_str()));
    let profile = state.profile;

    info!(
        %request_id,
        %passage,
        mode = ?req.mode,
        %profile,
        "generating sermon prep"
    );

    let user_message = profile.compose_user_message(&passage, mode);
    let output = state
        .generator
        .generate(profile.system_prompt(), &user_message, profile.max_tokens())
        .await
        .map_err(|err| {
            let details = format!("{err:#}");
            error!(%request_id, error = %details, "upstream generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to generate sermon preparation",
                    details,
                )),
            )
        })?;

    Ok(Json(SermonPrepResponse {
        output,
        passage,
        mode: req.mode,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Sermon Prep API is running",
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found")),
    )
        .into_response()
}
