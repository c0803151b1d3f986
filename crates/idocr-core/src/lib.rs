//! Core library for Brazilian ID document OCR post-processing.
//!
//! This crate provides:
//! - A recognition-result tree model (document, blocks, lines,
//!   elements) as emitted by an external OCR engine
//! - Rule-based field extraction for RG/CPF cards (name, CPF,
//!   parentage)
//! - Capture quality evaluation (legibility verdict from element
//!   confidences)
//! - Report assembly for human review

pub mod document;
pub mod error;
pub mod models;
pub mod quality;
pub mod recognition;
pub mod report;

pub use document::{extract_fields, DocumentParser, FieldParser};
pub use error::{IdocrError, Result};
pub use models::config::IdocrConfig;
pub use models::document::DocumentFields;
pub use quality::{
    evaluate_quality, CaptureDecision, QualityEvaluator, QualityVerdict, LEGIBLE_THRESHOLD,
};
pub use recognition::{
    BoundingBox, RecognitionBlock, RecognitionElement, RecognitionLine, RecognitionResult,
};
