use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
  User,
  Bot,
}

/// One transcript entry as exchanged with the chat page.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Message {
  pub role: MessageRole,
  pub content: String,
}

impl Message {
  #[must_use]
  pub fn is_user(&self) -> bool {
    matches!(self.role, MessageRole::User)
  }
}
