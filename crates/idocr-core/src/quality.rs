//! Capture quality evaluation.
//!
//! Aggregates element-level OCR confidence into a single mean and
//! classifies the capture as legible or not. Elements with confidence
//! absent or equal to 0 carry no signal and are excluded from both
//! numerator and denominator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recognition::RecognitionResult;

/// Mean-confidence threshold at or above which a capture counts as
/// legible. Policy constant; override per evaluator with
/// [`QualityEvaluator::with_threshold`].
pub const LEGIBLE_THRESHOLD: f32 = 0.60;

/// Three-way classification of overall capture quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityVerdict {
    /// Mean confidence reached the threshold.
    Legible(f32),
    /// Confidence-bearing elements exist but the mean fell short.
    Illegible(f32),
    /// No element carried a usable confidence at all.
    Unscored,
}

impl QualityVerdict {
    /// Mean confidence over qualifying elements, if any existed.
    pub fn mean_confidence(&self) -> Option<f32> {
        match self {
            QualityVerdict::Legible(mean) | QualityVerdict::Illegible(mean) => Some(*mean),
            QualityVerdict::Unscored => None,
        }
    }

    pub fn is_legible(&self) -> bool {
        matches!(self, QualityVerdict::Legible(_))
    }

    /// Map the verdict to the capture decision: accept a legible
    /// capture, retake anything else.
    pub fn decision(&self) -> CaptureDecision {
        if self.is_legible() {
            CaptureDecision::Accept
        } else {
            CaptureDecision::Retake
        }
    }
}

/// What the caller should do with the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureDecision {
    Accept,
    Retake,
}

/// Evaluator producing a [`QualityVerdict`] for one recognition tree.
pub struct QualityEvaluator {
    threshold: f32,
}

impl QualityEvaluator {
    /// Create an evaluator with the default threshold.
    pub fn new() -> Self {
        Self {
            threshold: LEGIBLE_THRESHOLD,
        }
    }

    /// Override the legibility threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Walk the tree in document order and classify the capture.
    ///
    /// The mean is reported at full precision; rounding for display is
    /// the caller's job.
    pub fn evaluate(&self, result: &RecognitionResult) -> QualityVerdict {
        let mut sum = 0.0f32;
        let mut count = 0u32;

        for element in result.elements() {
            if let Some(confidence) = element.confidence {
                if confidence > 0.0 {
                    sum += confidence;
                    count += 1;
                }
            }
        }

        if count == 0 {
            debug!("no confidence-bearing elements, capture is unscored");
            return QualityVerdict::Unscored;
        }

        let mean = sum / count as f32;
        debug!(
            "mean confidence {:.4} over {} elements (threshold {:.2})",
            mean, count, self.threshold
        );

        if mean >= self.threshold {
            QualityVerdict::Legible(mean)
        } else {
            QualityVerdict::Illegible(mean)
        }
    }
}

impl Default for QualityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a recognition result with the default threshold.
pub fn evaluate_quality(result: &RecognitionResult) -> QualityVerdict {
    QualityEvaluator::new().evaluate(result)
}
