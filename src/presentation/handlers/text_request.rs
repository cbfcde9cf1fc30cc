use serde::Deserialize;

/// Body shared by the text endpoints.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}
