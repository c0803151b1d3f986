//! Parentage field ("filiação") extraction.

use super::patterns::AFFILIATION_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// Affiliation field extractor.
///
/// RG cards print parentage in uppercase after the "FILIAÇÃO" label;
/// the rule requires a run of at least five letters/spaces so a bare
/// label with no value yields nothing. There is no upper bound on the
/// run within the line.
pub struct AffiliationExtractor;

impl AffiliationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AffiliationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AffiliationExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AFFILIATION_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let value = caps.get(1)?.as_str().trim().to_string();
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(value, 0.85, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the parentage field from text.
pub fn extract_affiliation(text: &str) -> Option<String> {
    AffiliationExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_affiliation() {
        assert_eq!(
            extract_affiliation("FILIAÇÃO: JOAO DA SILVA E MARIA DA SILVA"),
            Some("JOAO DA SILVA E MARIA DA SILVA".to_string())
        );
    }

    #[test]
    fn label_is_accent_insensitive() {
        assert_eq!(
            extract_affiliation("FILIACAO JOSE SANTOS"),
            Some("JOSE SANTOS".to_string())
        );
    }

    #[test]
    fn accepts_accented_values() {
        assert_eq!(
            extract_affiliation("Filiação: JOÃO DA CONCEIÇÃO"),
            Some("JOÃO DA CONCEIÇÃO".to_string())
        );
    }

    #[test]
    fn rejects_short_runs() {
        assert_eq!(extract_affiliation("FILIAÇÃO: ANA"), None);
    }

    #[test]
    fn run_stops_at_line_break() {
        let text = "FILIAÇÃO: JOAO DA SILVA E MARIA DA SILVA\nCPF: 123.456.789-01";
        assert_eq!(
            extract_affiliation(text),
            Some("JOAO DA SILVA E MARIA DA SILVA".to_string())
        );
    }

    #[test]
    fn missing_label_yields_none() {
        assert_eq!(extract_affiliation("Nome: Ana Souza"), None);
    }
}
