mod error;
pub use error::AppError;

mod message;
pub use message::{Message, MessageRole};
