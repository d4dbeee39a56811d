//! Maps the model's free-text answer onto [`GenderResult`].
//!
//! Fallback rules are tried in order and the first match wins. `female`
//! contains `male`, so the `female` rule has to come first.

use crate::gender_result::GenderResult;

pub enum Rule {
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Rule {
    fn matches(&self, lowercase: &str) -> bool {
        match self {
            Rule::Contains(needle) => lowercase.contains(needle),
            Rule::ContainsAny(needles) => needles.iter().any(|needle| lowercase.contains(needle)),
        }
    }
}

pub const FALLBACK_RULES: [(Rule, GenderResult); 4] = [
    (Rule::Contains("female"), GenderResult::Female),
    (Rule::Contains("male"), GenderResult::Male),
    (Rule::Contains("indeterminate"), GenderResult::Indeterminate),
    (
        Rule::ContainsAny(&["no face", "nofacedetected"]),
        GenderResult::NoFaceDetected,
    ),
];

pub fn normalize(text: &str) -> GenderResult {
    let trimmed = text.trim();

    if let Some(exact) = GenderResult::KEYWORDS
        .iter()
        .find(|result| result.keyword() == Some(trimmed))
    {
        return *exact;
    }

    let lowercase = trimmed.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|(rule, _)| rule.matches(&lowercase))
        .map(|(_, result)| *result)
        .unwrap_or(GenderResult::Indeterminate)
}
