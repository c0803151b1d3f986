//! CPF (Brazilian natural-person registry number) extraction and
//! validation.

use super::patterns::CPF_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// CPF field extractor.
///
/// Captures the matched token verbatim, formatted or bare. Check-digit
/// validation is opt-in: scanned cards routinely carry OCR-mangled
/// digits and the default behavior is best-effort capture.
pub struct CpfExtractor {
    validate: bool,
}

impl CpfExtractor {
    /// Create a new CPF extractor (no checksum validation).
    pub fn new() -> Self {
        Self { validate: false }
    }

    /// Set whether to reject candidates with a bad check digit.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for CpfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CpfExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CPF_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let value = caps.get(1)?.as_str().to_string();

                if self.validate && !validate_cpf(&value) {
                    return None;
                }

                // Formatted candidates are harder to produce by
                // accident than a bare digit run.
                let confidence = if value.contains('.') { 0.9 } else { 0.7 };
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(value, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the first CPF candidate from text, verbatim.
pub fn extract_cpf(text: &str) -> Option<String> {
    CpfExtractor::new().extract(text).map(|m| m.value)
}

/// Validate a CPF using the check-digit algorithm.
///
/// CPF format: 11 digits where the last two are checksums. Each check
/// digit is `11 - (weighted sum % 11)`, clamped to 0 when that yields
/// 10 or 11. Repeated-digit sequences (000..., 111...) are rejected.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let check = |len: usize| -> u32 {
        let sum: u32 = digits
            .iter()
            .take(len)
            .zip((2..=(len as u32 + 1)).rev())
            .map(|(d, w)| d * w)
            .sum();
        match 11 - sum % 11 {
            10 | 11 => 0,
            d => d,
        }
    };

    check(9) == digits[9] && check(10) == digits[10]
}

/// Format a CPF with separators (XXX.XXX.XXX-XX).
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_formatted_cpf_verbatim() {
        assert_eq!(
            extract_cpf("CPF: 123.456.789-01"),
            Some("123.456.789-01".to_string())
        );
    }

    #[test]
    fn extracts_bare_digit_run_verbatim() {
        assert_eq!(
            extract_cpf("documento 12345678901 emitido"),
            Some("12345678901".to_string())
        );
    }

    #[test]
    fn first_occurrence_wins_across_forms() {
        // Bare run appears first: it wins over the formatted one.
        let text = "98765432100 e depois CPF 123.456.789-01";
        assert_eq!(extract_cpf(text), Some("98765432100".to_string()));

        // Formatted appears first: it wins over the bare run.
        let text = "CPF 123.456.789-01 e depois 98765432100";
        assert_eq!(extract_cpf(text), Some("123.456.789-01".to_string()));
    }

    #[test]
    fn rejects_longer_digit_runs() {
        assert_eq!(extract_cpf("conta 123456789012 banco"), None);
    }

    #[test]
    fn validate_cpf_valid() {
        // Known valid CPFs
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("529.982.247-25")); // With separators
    }

    #[test]
    fn validate_cpf_invalid() {
        assert!(!validate_cpf("123.456.789-01")); // Bad check digits
        assert!(!validate_cpf("11111111111")); // Repeated digits
        assert!(!validate_cpf("1234567890")); // Too short
    }

    #[test]
    fn validation_filters_candidates() {
        let extractor = CpfExtractor::new().with_validation(true);
        assert!(extractor.extract("CPF: 123.456.789-01").is_none());
        let found = extractor.extract("CPF: 529.982.247-25").unwrap();
        assert_eq!(found.value, "529.982.247-25");
    }

    #[test]
    fn format_cpf_adds_separators() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
    }
}
