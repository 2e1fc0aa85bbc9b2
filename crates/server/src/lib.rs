pub mod api;
pub mod utils;

mod server;
pub use server::{app, serve};

// Re-export for OpenAPI documentation
pub use api::ApiDoc;
