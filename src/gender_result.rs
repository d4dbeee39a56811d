use std::fmt;

/// Outcome of the most recent classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderResult {
    Male,
    Female,
    Indeterminate,
    NoFaceDetected,
    Error,
    #[default]
    Unset,
}

impl GenderResult {
    /// Keywords the vision model is asked to answer with.
    pub const KEYWORDS: [GenderResult; 4] = [
        GenderResult::Male,
        GenderResult::Female,
        GenderResult::Indeterminate,
        GenderResult::NoFaceDetected,
    ];

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            GenderResult::Male => Some("Male"),
            GenderResult::Female => Some("Female"),
            GenderResult::Indeterminate => Some("Indeterminate"),
            GenderResult::NoFaceDetected => Some("NoFaceDetected"),
            GenderResult::Error | GenderResult::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, GenderResult::Unset)
    }

    pub fn message(&self) -> &'static str {
        match self {
            GenderResult::Male => "Perceived gender: Male",
            GenderResult::Female => "Perceived gender: Female",
            GenderResult::Indeterminate => "Perceived gender: Indeterminate",
            GenderResult::NoFaceDetected => "No face detected in the image",
            GenderResult::Error => "Could not classify. Try again.",
            GenderResult::Unset => "",
        }
    }
}

impl fmt::Display for GenderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keyword() {
            Some(keyword) => f.write_str(keyword),
            None => write!(f, "{:?}", self),
        }
    }
}
