//! Holder name extraction.

use super::patterns::NAME_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// Name field extractor.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NAME_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let value = caps.get(1)?.as_str().trim().to_string();
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(value, 0.9, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the holder name from text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}
