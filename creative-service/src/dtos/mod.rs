use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for brief generation. Both fields are required and non-empty;
/// they are serialized verbatim into the prompt.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct GenerateBriefRequest {
    #[validate(
        required(message = "Product and audience are required."),
        length(min = 1, message = "Product and audience are required.")
    )]
    pub product: Option<String>,

    #[validate(
        required(message = "Product and audience are required."),
        length(min = 1, message = "Product and audience are required.")
    )]
    pub audience: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExemplarUploadRequest {
    #[validate(
        required(message = "Text content is required."),
        length(min = 1, message = "Text content is required.")
    )]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
