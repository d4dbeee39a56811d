use crate::gender_result::GenderResult;
use crate::image_data::ImageData;
use thiserror::Error;

/// Turns an image into exactly one [`GenderResult`]. Never fails: every
/// fault resolves to [`GenderResult::Error`].
pub trait GenderClassifier: Send + Sync {
    fn classify(&self, image: &ImageData) -> GenderResult;
}

/// Why a classification resolved to `Error`. Logged, never returned.
#[derive(Debug, Error)]
pub enum ClassificationFault {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("classification failed: {0}")]
    ClassificationFailure(#[from] crate::vision_model::interface::VisionModelError),
}
