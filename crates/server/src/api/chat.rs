use anyhow::anyhow;
use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
};
use healthbot_ai::{GeminiError, build_request};
use healthbot_shared::{AppError, Message};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
  pub messages: Vec<Message>,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
  pub answer: String,
}

/// A body that is valid JSON but not a `{ messages: [...] }` object is the
/// client's fault; everything else about extraction (syntax errors,
/// truncated bodies) counts as an unexpected failure.
fn rejection_to_error(rejection: JsonRejection) -> AppError {
  match rejection {
    JsonRejection::JsonDataError(_) => {
      AppError::with_status(StatusCode::BAD_REQUEST, anyhow!("Invalid request format"))
    }
    _ => AppError::with_status(StatusCode::INTERNAL_SERVER_ERROR, anyhow!("Server error")),
  }
}

/// Relay a chat transcript to the provider and return a single answer
#[utoipa::path(
  post,
  path = "/api/chat",
  request_body = ChatRequest,
  responses(
    (status = 200, description = "Generated answer", body = ChatResponse),
    (status = 400, description = "Body is missing a messages array"),
    (status = 500, description = "Unexpected failure")
  )
)]
#[axum::debug_handler]
pub async fn chat(
  State(state): State<AppState>,
  payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
  let Json(payload) = payload.map_err(rejection_to_error)?;

  let request = build_request(&payload.messages);

  match state.gemini.generate_content(&request).await {
    Ok(answer) => Ok(Json(ChatResponse { answer })),
    // Provider errors are passed through verbatim: same status, raw body.
    Err(GeminiError::Remote { status, body }) => Err(AppError::with_status(
      StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
      anyhow!(body),
    )),
    Err(err) => {
      tracing::error!(%err, "provider call failed");
      Err(AppError::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        anyhow!("Server error"),
      ))
    }
  }
}
