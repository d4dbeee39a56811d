use crate::device_camera::interface::CameraFacing;
use std::time::Duration;

/// Ceiling imposed by the vision model's inline payload limit. Config may
/// lower it, never raise it.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 4 * 1024 * 1024;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct AcquisitionConfig {
    pub max_file_bytes: u64,
    pub camera_facing: CameraFacing,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            camera_facing: CameraFacing::Front,
        }
    }
}

#[derive(Clone)]
pub struct GeminiConfig {
    /// Read once at startup. `None` is a configuration fault reported on
    /// every classification, never a crash.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub acquisition: AcquisitionConfig,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Build config from environment variables (a `.env` file is honored).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            acquisition: AcquisitionConfig {
                max_file_bytes: non_empty("MAX_UPLOAD_BYTES")
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(|bytes| bytes.min(DEFAULT_MAX_FILE_BYTES))
                    .unwrap_or(defaults.acquisition.max_file_bytes),
                camera_facing: match non_empty("CAMERA_FACING").as_deref() {
                    Some("back") | Some("environment") => CameraFacing::Back,
                    _ => CameraFacing::Front,
                },
            },
            gemini: GeminiConfig {
                api_key: non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY")),
                model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.gemini.base_url),
                timeout: non_empty("GEMINI_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs),
            },
        }
    }
}
