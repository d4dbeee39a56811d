use thiserror::Error;

/// Failures surfaced to the user while bringing an image into the app.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Unsupported file type \"{content_type}\". Choose a PNG, JPEG, WEBP, GIF, HEIC or HEIF image.")]
    InvalidFileType { content_type: String },

    #[error("File is too large ({size} bytes). The limit is {limit} bytes.")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Could not read the file: {0}")]
    FileReadFailure(#[source] std::io::Error),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("The camera is not open. Open it before capturing.")]
    NotCapturing,
}
