use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Content types accepted for classification.
pub const SUPPORTED_MIME_TYPES: [&str; 6] = [
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/gif",
    "image/heic",
    "image/heif",
];

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

pub fn is_supported_mime_type(content_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&content_type)
}

/// Normalized image payload handed from acquisition to classification.
///
/// `data` is the base64 encoding of the raw bytes. Fields are private so a
/// value can't be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    data: String,
    mime_type: String,
    name: Option<String>,
}

impl ImageData {
    pub fn from_bytes(bytes: &[u8], mime_type: &str, name: Option<String>) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
            name,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("untitled image")
    }
}
