//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::quality::LEGIBLE_THRESHOLD;

/// Main configuration for the idocr pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdocrConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Quality evaluation configuration.
    pub quality: QualityConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Reject CPF candidates with a bad check digit.
    pub validate_cpf: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_cpf: false, // Capture verbatim; scans mangle digits
        }
    }
}

/// Quality evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Mean-confidence threshold for a legible verdict (0.0 - 1.0).
    pub legible_threshold: f32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            legible_threshold: LEGIBLE_THRESHOLD,
        }
    }
}

impl IdocrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_matches_policy_constant() {
        let config = IdocrConfig::default();
        assert_eq!(config.quality.legible_threshold, LEGIBLE_THRESHOLD);
        assert!(!config.extraction.validate_cpf);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: IdocrConfig =
            serde_json::from_str(r#"{"quality":{"legible_threshold":0.75}}"#).unwrap();
        assert_eq!(config.quality.legible_threshold, 0.75);
        assert!(!config.extraction.validate_cpf);
    }
}
