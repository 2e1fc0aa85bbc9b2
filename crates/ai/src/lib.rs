mod error;
pub use error::GeminiError;

mod generate_content;
pub use generate_content::{GEMINI_API_URL, GeminiClient};

mod payload;
pub use payload::{
  Content, DEFAULT_GREETING, GenerateContentRequest, Part, SYSTEM_INSTRUCTION, build_request,
};

mod response;
pub use response::{FALLBACK_ANSWER, GenerateContentResponse};
