//! Extracted-field data model for Brazilian identity documents.

use serde::{Deserialize, Serialize};

/// Normalized fields extracted from one capture attempt.
///
/// `None` means the rule found no qualifying match; extraction itself
/// never fails. A fresh value is produced per capture, never merged
/// across attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFields {
    /// Holder name ("nome").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// CPF identifier, verbatim as printed (formatted or bare).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Parentage field ("filiação").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl DocumentFields {
    /// Whether every field was found.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.cpf.is_some() && self.affiliation.is_some()
    }

    /// Names of fields that were not found, in summary order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.cpf.is_none() {
            missing.push("cpf");
        }
        if self.affiliation.is_none() {
            missing.push("affiliation");
        }
        missing
    }
}
