use serde::Deserialize;

/// Substituted when the provider succeeds but the candidate path holds no
/// usable text.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't generate a response.";

/// Response body of `generateContent`, reduced to the path we read.
///
/// Every segment is optional: provider responses without candidates (for
/// example when a safety filter fires) still deserialize, and the answer
/// extraction degrades to `None` instead of failing the request.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
  #[serde(default)]
  pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
  #[serde(default)]
  pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
  #[serde(default)]
  pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
  #[serde(default)]
  pub text: Option<String>,
}

impl GenerateContentResponse {
  /// Text of the first part of the first candidate, if present and
  /// non-empty.
  #[must_use]
  pub fn answer_text(&self) -> Option<&str> {
    self
      .candidates
      .first()?
      .content
      .as_ref()?
      .parts
      .first()?
      .text
      .as_deref()
      .filter(|text| !text.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_first_candidate_text() {
    let response: GenerateContentResponse = serde_json::from_str(
      r#"{
        "candidates": [
          {
            "content": {
              "parts": [{ "text": "Drink water." }, { "text": "ignored" }],
              "role": "model"
            },
            "finishReason": "STOP"
          }
        ],
        "usageMetadata": { "totalTokenCount": 12 }
      }"#,
    )
    .unwrap();

    assert_eq!(response.answer_text(), Some("Drink water."));
  }

  #[test]
  fn missing_candidates_yields_none() {
    let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.answer_text(), None);
  }

  #[test]
  fn empty_parts_yields_none() {
    let response: GenerateContentResponse =
      serde_json::from_str(r#"{ "candidates": [{ "content": { "parts": [] } }] }"#).unwrap();
    assert_eq!(response.answer_text(), None);
  }

  #[test]
  fn empty_text_yields_none() {
    let response: GenerateContentResponse =
      serde_json::from_str(r#"{ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }"#)
        .unwrap();
    assert_eq!(response.answer_text(), None);
  }
}
