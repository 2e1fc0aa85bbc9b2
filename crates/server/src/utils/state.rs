use healthbot_ai::GeminiClient;

#[derive(Clone)]
pub struct AppState {
  pub gemini: GeminiClient,
}

impl AppState {
  #[must_use]
  pub const fn new(gemini: GeminiClient) -> Self {
    Self { gemini }
  }
}
