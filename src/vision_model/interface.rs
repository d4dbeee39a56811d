use thiserror::Error;

/// One classification request: an inline image plus a text instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionRequest {
    pub mime_type: String,
    /// Base64 image payload.
    pub data: String,
    pub prompt: String,
}

#[derive(Debug, Error)]
pub enum VisionModelError {
    #[error("request to vision model failed: {0}")]
    Transport(String),

    #[error("vision model returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed vision model response: {0}")]
    Malformed(String),

    #[error("vision model returned no text")]
    EmptyResponse,
}

/// A remote model answering a single request with free text.
pub trait VisionModel: Send + Sync {
    fn generate(&self, api_key: &str, request: &VisionRequest) -> Result<String, VisionModelError>;
}
