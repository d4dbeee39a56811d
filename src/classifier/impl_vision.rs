use crate::classifier::interface::{ClassificationFault, GenderClassifier};
use crate::classifier::normalize::normalize;
use crate::gender_result::GenderResult;
use crate::image_data::ImageData;
use crate::library::logger::interface::Logger;
use crate::vision_model::interface::{VisionModel, VisionRequest};
use std::sync::Arc;

/// Instruction sent with every image. The model's reply is parsed against
/// these exact keywords, so keep them in sync with [`GenderResult::keyword`].
pub const CLASSIFICATION_PROMPT: &str = "Analyze the most prominent human face in this image and classify its perceived gender. Respond with exactly one word: Male, Female, or Indeterminate. If no human face is visible in the image, respond with exactly NoFaceDetected. Do not include any explanation, punctuation, or other text.";

pub struct GenderClassifierVision {
    api_key: Option<String>,
    model: Arc<dyn VisionModel + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl GenderClassifierVision {
    pub fn new(
        api_key: Option<String>,
        model: Arc<dyn VisionModel + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            api_key,
            model,
            logger: logger.with_namespace("classifier"),
        }
    }

    fn try_classify(&self, image: &ImageData) -> Result<GenderResult, ClassificationFault> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClassificationFault::MissingCredential)?;

        let request = VisionRequest {
            mime_type: image.mime_type().to_string(),
            data: image.data().to_string(),
            prompt: CLASSIFICATION_PROMPT.to_string(),
        };

        let text = self.model.generate(api_key, &request)?;
        let result = normalize(&text);

        self.logger.info(&format!(
            "Model answered {:?} for {}, normalized to {}",
            text.trim(),
            image.display_name(),
            result
        ));

        Ok(result)
    }
}

impl GenderClassifier for GenderClassifierVision {
    fn classify(&self, image: &ImageData) -> GenderResult {
        match self.try_classify(image) {
            Ok(result) => result,
            Err(fault @ ClassificationFault::MissingCredential) => {
                self.logger
                    .error(&format!("Configuration fault: {}. Set API_KEY.", fault));
                GenderResult::Error
            }
            Err(fault) => {
                self.logger.error(&format!("Runtime fault: {}", fault));
                GenderResult::Error
            }
        }
    }
}
