//! Gemini `generateContent` client.

use crate::config::GeminiConfig;
use crate::library::logger::interface::Logger;
use crate::vision_model::interface::{VisionModel, VisionModelError, VisionRequest};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub struct VisionModelGemini {
    client: Client,
    model: String,
    base_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl VisionModelGemini {
    pub fn new(
        config: &GeminiConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, VisionModelError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VisionModelError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            logger: logger.with_namespace("vision_model").with_namespace("gemini"),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

fn build_request(request: &VisionRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: request.mime_type.clone(),
                        data: request.data.clone(),
                    },
                },
                Part::Text {
                    text: request.prompt.clone(),
                },
            ],
        }],
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, VisionModelError> {
    let response: GeminiResponse =
        serde_json::from_str(body).map_err(|e| VisionModelError::Malformed(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(VisionModelError::EmptyResponse);
    }

    Ok(text)
}

impl VisionModel for VisionModelGemini {
    fn generate(&self, api_key: &str, request: &VisionRequest) -> Result<String, VisionModelError> {
        self.logger.info(&format!(
            "Calling {} with {} image",
            self.model, request.mime_type
        ));

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_request(request))
            .send()
            .map_err(|e| VisionModelError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| VisionModelError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(VisionModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use serde_json::json;

    fn request() -> VisionRequest {
        VisionRequest {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
            prompt: "Classify.".to_string(),
        }
    }

    #[test]
    fn request_body_carries_inline_image_then_prompt() {
        let body = serde_json::to_value(build_request(&request())).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } },
                        { "text": "Classify." }
                    ]
                }]
            })
        );
    }

    #[test]
    fn extracts_and_joins_text_parts() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Fe" }, { "text": "male" }] } },
                { "content": { "parts": [{ "text": "Male" }] } }
            ]
        })
        .to_string();

        assert_eq!(extract_text(&body).unwrap(), "Female");
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        assert!(matches!(
            extract_text(r#"{"candidates": []}"#),
            Err(VisionModelError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#),
            Err(VisionModelError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#),
            Err(VisionModelError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            extract_text("<html>bad gateway</html>"),
            Err(VisionModelError::Malformed(_))
        ));
    }

    #[test]
    fn endpoint_includes_model() {
        let config = GeminiConfig {
            base_url: "http://localhost:9/".to_string(),
            ..GeminiConfig::default()
        };
        let model = VisionModelGemini::new(&config, Arc::new(LoggerFake::new())).unwrap();

        assert_eq!(
            model.endpoint(),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let config = GeminiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..GeminiConfig::default()
        };
        let model = VisionModelGemini::new(&config, Arc::new(LoggerFake::new())).unwrap();

        assert!(matches!(
            model.generate("key", &request()),
            Err(VisionModelError::Transport(_))
        ));
    }
}
