//! Rule-based field extractors for Brazilian identity documents.

pub mod affiliation;
pub mod cpf;
pub mod name;
pub mod patterns;

pub use affiliation::{extract_affiliation, AffiliationExtractor};
pub use cpf::{extract_cpf, format_cpf, validate_cpf, CpfExtractor};
pub use name::{extract_name, NameExtractor};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field in document order.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Rule confidence (0.0 - 1.0): how reliable this rule's matches
    /// are, not the OCR engine's score.
    pub confidence: f32,
    /// Byte position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
