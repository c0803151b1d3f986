//! Data models shared across the pipeline.

pub mod config;
pub mod document;

pub use config::{ExtractionConfig, IdocrConfig, QualityConfig};
pub use document::DocumentFields;
