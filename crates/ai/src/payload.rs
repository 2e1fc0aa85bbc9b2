use healthbot_shared::Message;
use serde::Serialize;

/// Topic restriction sent as the first part of every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that only answers health-related questions. If the question is not about health, politely refuse to answer.";

/// Stand-in user turn when the client sent no user messages.
pub const DEFAULT_GREETING: &str = "Hello!";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Part {
  pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Content {
  pub parts: Vec<Part>,
}

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GenerateContentRequest {
  pub contents: Vec<Content>,
}

/// Shape a client transcript into the provider payload.
///
/// Only user turns are replayed, in order; bot turns never reach the
/// provider. The system instruction is always the first part, and an
/// otherwise empty part list gets [`DEFAULT_GREETING`] so the provider
/// always sees at least one user turn.
#[must_use]
pub fn build_request(messages: &[Message]) -> GenerateContentRequest {
  let mut parts = vec![Part {
    text: SYSTEM_INSTRUCTION.to_owned(),
  }];

  let user_parts: Vec<Part> = messages
    .iter()
    .filter(|m| m.is_user())
    .map(|m| Part {
      text: m.content.clone(),
    })
    .collect();

  if user_parts.is_empty() {
    parts.push(Part {
      text: DEFAULT_GREETING.to_owned(),
    });
  } else {
    parts.extend(user_parts);
  }

  GenerateContentRequest {
    contents: vec![Content { parts }],
  }
}

#[cfg(test)]
mod tests {
  use healthbot_shared::MessageRole;

  use super::*;

  fn msg(role: MessageRole, content: &str) -> Message {
    Message {
      role,
      content: content.to_owned(),
    }
  }

  #[test]
  fn system_instruction_is_always_first() {
    let request = build_request(&[msg(MessageRole::User, "is coffee healthy?")]);
    assert_eq!(request.contents.len(), 1);
    assert_eq!(request.contents[0].parts[0].text, SYSTEM_INSTRUCTION);

    let request = build_request(&[]);
    assert_eq!(request.contents[0].parts[0].text, SYSTEM_INSTRUCTION);
  }

  #[test]
  fn empty_transcript_falls_back_to_greeting() {
    let request = build_request(&[]);
    assert_eq!(
      request.contents[0].parts,
      vec![
        Part {
          text: SYSTEM_INSTRUCTION.to_owned()
        },
        Part {
          text: DEFAULT_GREETING.to_owned()
        },
      ]
    );
  }

  #[test]
  fn bot_turns_are_dropped() {
    let request = build_request(&[
      msg(MessageRole::User, "how much sleep do I need?"),
      msg(MessageRole::Bot, "About 7-9 hours."),
      msg(MessageRole::User, "and for teenagers?"),
    ]);

    let texts: Vec<&str> = request.contents[0]
      .parts
      .iter()
      .map(|p| p.text.as_str())
      .collect();
    assert_eq!(
      texts,
      vec![
        SYSTEM_INSTRUCTION,
        "how much sleep do I need?",
        "and for teenagers?",
      ]
    );
  }

  #[test]
  fn bot_only_transcript_still_gets_greeting() {
    let request = build_request(&[msg(MessageRole::Bot, "Hi, ask me about health.")]);
    assert_eq!(request.contents[0].parts.len(), 2);
    assert_eq!(request.contents[0].parts[1].text, DEFAULT_GREETING);
  }
}
