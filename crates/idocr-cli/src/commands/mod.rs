//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use anyhow::Context;

use idocr_core::models::config::IdocrConfig;
use idocr_core::quality::QualityVerdict;
use idocr_core::{DocumentParser, QualityEvaluator, RecognitionResult};

/// Load the config file if given, otherwise defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IdocrConfig> {
    match config_path {
        Some(path) => IdocrConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(IdocrConfig::default()),
    }
}

/// Read a recognition result from a JSON file.
pub fn read_recognition(path: &Path) -> anyhow::Result<RecognitionResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a recognition result", path.display()))
}

/// Build the parser and evaluator from config, with an optional
/// per-run threshold override.
pub fn build_pipeline(
    config: &IdocrConfig,
    threshold: Option<f32>,
    validate_cpf: bool,
) -> (DocumentParser, QualityEvaluator) {
    let parser =
        DocumentParser::new().with_cpf_validation(validate_cpf || config.extraction.validate_cpf);
    let evaluator = QualityEvaluator::new()
        .with_threshold(threshold.unwrap_or(config.quality.legible_threshold));
    (parser, evaluator)
}

/// Short label for a verdict, shared by text and CSV output.
pub fn verdict_label(verdict: &QualityVerdict) -> &'static str {
    match verdict {
        QualityVerdict::Legible(_) => "legible",
        QualityVerdict::Illegible(_) => "illegible",
        QualityVerdict::Unscored => "unscored",
    }
}
