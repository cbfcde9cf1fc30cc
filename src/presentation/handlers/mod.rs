mod analyze;
mod correct;
mod documents;
mod error_response;
mod health;
mod summarize;
mod text_request;

pub use analyze::analyze_handler;
pub use correct::{CorrectResponse, correct_handler};
pub use documents::{DocumentQuery, documents_handler};
pub use error_response::ErrorResponse;
pub use health::{HealthResponse, health_handler};
pub use summarize::summarize_handler;
pub use text_request::TextRequest;
