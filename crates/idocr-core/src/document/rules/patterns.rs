//! Common regex patterns for Brazilian ID card extraction.
//!
//! All patterns are case-insensitive and tuned for the "label then
//! value" layout of RG/CPF cards. Value runs deliberately stay within
//! a single line so a following labeled line cannot bleed into the
//! capture.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Holder name: the "nome" label followed by two or more
    // space-separated alphabetic tokens (Latin-1 accented range).
    pub static ref NAME_PATTERN: Regex = Regex::new(
        r"(?i)nome[:\s]*([a-zà-ú]+(?:[ \t]+[a-zà-ú]+)+)"
    ).unwrap();

    // CPF: formatted (ddd.ddd.ddd-dd) or a bare 11-digit run, as a
    // whole token. A single alternation scanned left-to-right makes
    // the first occurrence in the string win regardless of form.
    pub static ref CPF_PATTERN: Regex = Regex::new(
        r"\b(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{11})\b"
    ).unwrap();

    // Parentage ("filiação", accent-insensitive label): a run of 5+
    // uppercase letters and spaces after the label.
    pub static ref AFFILIATION_PATTERN: Regex = Regex::new(
        r"(?i)filia[çc][ãa]o[:\s]*([A-ZÀ-Ú][A-ZÀ-Ú ]{4,})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_tokens() {
        assert!(NAME_PATTERN.is_match("Nome: Maria Silva"));
        assert!(!NAME_PATTERN.is_match("Nome: Maria"));
    }

    #[test]
    fn cpf_matches_whole_tokens_only() {
        assert!(CPF_PATTERN.is_match("CPF 123.456.789-01"));
        assert!(CPF_PATTERN.is_match("12345678901"));
        // 12 consecutive digits are not a CPF token
        assert!(!CPF_PATTERN.is_match("123456789012"));
    }

    #[test]
    fn affiliation_accepts_unaccented_label() {
        assert!(AFFILIATION_PATTERN.is_match("FILIACAO: JOAO DA SILVA"));
        assert!(AFFILIATION_PATTERN.is_match("Filiação: MARIA DA SILVA"));
    }
}
