use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod chat;

pub use chat::{ChatRequest, ChatResponse};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "HealthBot API",
    version = "0.0.1",
    description = "Health-domain chat relay for the Gemini generateContent API"
  ),
  paths(chat::chat),
  components(schemas(
    ChatRequest,
    ChatResponse,
    healthbot_shared::Message,
    healthbot_shared::MessageRole,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/api/chat", post(chat::chat))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
