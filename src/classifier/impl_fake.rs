use crate::classifier::interface::GenderClassifier;
use crate::gender_result::GenderResult;
use crate::image_data::ImageData;
use crate::library::logger::interface::Logger;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;

/// Offline stand-in that picks a random outcome after a short delay.
pub struct GenderClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    latency: Duration,
}

impl GenderClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, latency: Duration) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            latency,
        }
    }
}

impl GenderClassifier for GenderClassifierFake {
    fn classify(&self, image: &ImageData) -> GenderResult {
        self.logger
            .info(&format!("Classifying {} with fake classifier...", image.display_name()));
        std::thread::sleep(self.latency);

        let result = GenderResult::KEYWORDS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(GenderResult::Indeterminate);

        self.logger.info(&format!("Fake classification: {}", result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn always_returns_a_keyword_outcome() {
        let classifier = GenderClassifierFake::new(Arc::new(LoggerFake::new()), Duration::ZERO);
        let image = ImageData::from_bytes(&[0], "image/png", None);

        for _ in 0..20 {
            assert!(GenderResult::KEYWORDS.contains(&classifier.classify(&image)));
        }
    }
}
