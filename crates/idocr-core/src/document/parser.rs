//! Rule-driven document parser.

use tracing::debug;

use crate::models::document::DocumentFields;
use crate::recognition::RecognitionResult;

use super::rules::{AffiliationExtractor, CpfExtractor, FieldExtractor, NameExtractor};

/// Trait for document field parsers.
pub trait FieldParser {
    /// Parse fields from plain text. Total: unmatched rules yield
    /// `None` fields, never an error.
    fn parse(&self, text: &str) -> DocumentFields;

    /// Parse fields from a recognition result's concatenated text.
    fn parse_result(&self, result: &RecognitionResult) -> DocumentFields {
        self.parse(&result.text)
    }
}

/// Parser running the fixed rule set for Brazilian RG/CPF cards.
///
/// Each rule targets a disjoint field, so evaluation order between
/// rules does not matter; within a rule the first match in document
/// order wins.
pub struct DocumentParser {
    /// Whether to reject CPF candidates with a bad check digit.
    validate_cpf: bool,
}

impl DocumentParser {
    /// Create a parser with default settings (verbatim CPF capture).
    pub fn new() -> Self {
        Self {
            validate_cpf: false,
        }
    }

    /// Set CPF check-digit validation.
    pub fn with_cpf_validation(mut self, validate: bool) -> Self {
        self.validate_cpf = validate;
        self
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldParser for DocumentParser {
    fn parse(&self, text: &str) -> DocumentFields {
        debug!("parsing fields from {} characters of text", text.len());

        let fields = DocumentFields {
            name: NameExtractor::new().extract(text).map(|m| m.value),
            cpf: CpfExtractor::new()
                .with_validation(self.validate_cpf)
                .extract(text)
                .map(|m| m.value),
            affiliation: AffiliationExtractor::new().extract(text).map(|m| m.value),
        };

        if !fields.is_complete() {
            debug!("fields not found: {:?}", fields.missing_fields());
        }

        fields
    }
}

/// Parse fields from text with the default parser.
pub fn extract_fields(text: &str) -> DocumentFields {
    DocumentParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_card_text() {
        let text = "FILIAÇÃO: JOAO DA SILVA E MARIA DA SILVA\nCPF: 123.456.789-01\nNome: Ana Souza";
        let fields = extract_fields(text);

        assert_eq!(fields.name, Some("Ana Souza".to_string()));
        assert_eq!(fields.cpf, Some("123.456.789-01".to_string()));
        assert_eq!(
            fields.affiliation,
            Some("JOAO DA SILVA E MARIA DA SILVA".to_string())
        );
    }

    #[test]
    fn absent_fields_stay_none() {
        let fields = extract_fields("RG 12.345.678-9 SSP/SP");
        assert_eq!(fields, DocumentFields::default());
    }

    #[test]
    fn empty_text_is_not_an_error() {
        let fields = extract_fields("");
        assert_eq!(fields, DocumentFields::default());
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "Nome: Maria Silva\nCPF 12345678901";
        let parser = DocumentParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn cpf_validation_is_opt_in() {
        let text = "CPF: 123.456.789-01"; // bad check digits
        let fields = DocumentParser::new().with_cpf_validation(true).parse(text);
        assert_eq!(fields.cpf, None);

        let fields = DocumentParser::new().parse(text);
        assert_eq!(fields.cpf, Some("123.456.789-01".to_string()));
    }

    #[test]
    fn parses_from_recognition_result() {
        use crate::recognition::{RecognitionBlock, RecognitionElement, RecognitionLine};

        let result = RecognitionResult::from_blocks(vec![RecognitionBlock::from_lines(vec![
            RecognitionLine::from_elements(vec![
                RecognitionElement::new("Nome:", Some(0.9)),
                RecognitionElement::new("Ana", Some(0.9)),
                RecognitionElement::new("Souza", Some(0.9)),
            ]),
        ])]);

        let fields = DocumentParser::new().parse_result(&result);
        assert_eq!(fields.name, Some("Ana Souza".to_string()));
    }
}
