use axum::{Router, response::Html, routing::get};
use healthbot_ai::GeminiClient;
use healthbot_shared::AppError;
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

const CHAT_PAGE: &str = include_str!("../assets/chat.html");

#[axum::debug_handler]
async fn chat_page() -> Html<&'static str> {
  Html(CHAT_PAGE)
}

pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/", get(chat_page))
    .merge(api::app())
    .with_state(state)
}

pub async fn serve() -> Result<(), AppError> {
  let app = app(AppState::new(GeminiClient::new()));

  let listener = TcpListener::bind("0.0.0.0:3000").await?;

  tracing::info!("server started at http://0.0.0.0:3000");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
