use std::env;

use crate::{FALLBACK_ANSWER, GeminiError, GenerateContentRequest, GenerateContentResponse};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-shot client for the `generateContent` endpoint. One attempt per
/// call: no retry, no timeout beyond the transport default, no streaming.
#[derive(Debug, Clone)]
pub struct GeminiClient {
  http: reqwest::Client,
  endpoint: String,
}

impl GeminiClient {
  #[must_use]
  pub fn new() -> Self {
    Self::with_endpoint(GEMINI_API_URL)
  }

  /// Client against a custom endpoint, used to point tests at a local
  /// stand-in provider.
  #[must_use]
  pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.into(),
    }
  }

  /// Issue the request and return the first candidate's text, or
  /// [`FALLBACK_ANSWER`] when the provider succeeded without usable text.
  ///
  /// The API key is read from the environment on every call and sent as-is;
  /// a missing key is the provider's to reject, not ours.
  pub async fn generate_content(
    &self,
    request: &GenerateContentRequest,
  ) -> Result<String, GeminiError> {
    let api_key = env::var(API_KEY_ENV).unwrap_or_default();

    tracing::debug!(endpoint = %self.endpoint, "calling generateContent");

    let response = self
      .http
      .post(&self.endpoint)
      .header(API_KEY_HEADER, api_key)
      .json(request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      tracing::warn!(status = status.as_u16(), "provider rejected request");
      return Err(GeminiError::Remote {
        status: status.as_u16(),
        body,
      });
    }

    let parsed: GenerateContentResponse = response.json().await?;
    Ok(parsed.answer_text().unwrap_or(FALLBACK_ANSWER).to_owned())
  }
}

impl Default for GeminiClient {
  fn default() -> Self {
    Self::new()
  }
}
