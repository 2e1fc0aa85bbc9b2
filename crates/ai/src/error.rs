use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
  /// The provider answered with a non-success status. The body is kept
  /// verbatim so callers can pass it through untouched.
  #[error("gemini returned {status}: {body}")]
  Remote { status: u16, body: String },

  #[error(transparent)]
  Http(#[from] reqwest::Error),
}
