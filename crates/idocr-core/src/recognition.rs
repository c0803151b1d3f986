//! Recognition-result tree produced by the external OCR engine.
//!
//! The engine emits one tree per capture attempt: document, blocks,
//! lines, elements. The core never mutates it; both the field parser
//! and the quality evaluator read the same immutable value.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Smallest recognized unit, roughly one word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionElement {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0). Engines may omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Bounding region, when the engine reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<BoundingBox>,
}

impl RecognitionElement {
    pub fn new(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            text: text.into(),
            confidence,
            region: None,
        }
    }

    pub fn with_region(mut self, region: BoundingBox) -> Self {
        self.region = Some(region);
        self
    }
}

/// One line of text: an ordered run of elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionLine {
    /// Line text (elements joined with spaces).
    pub text: String,

    /// Elements in reading order.
    pub elements: Vec<RecognitionElement>,

    /// Bounding region, when the engine reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<BoundingBox>,
}

impl RecognitionLine {
    /// Build a line from elements, deriving the line text.
    pub fn from_elements(elements: Vec<RecognitionElement>) -> Self {
        let text = elements
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            elements,
            region: None,
        }
    }
}

/// A block of lines, typically one visual paragraph on the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionBlock {
    /// Block text (lines joined with newlines).
    pub text: String,

    /// Lines in reading order.
    pub lines: Vec<RecognitionLine>,
}

impl RecognitionBlock {
    /// Build a block from lines, deriving the block text.
    pub fn from_lines(lines: Vec<RecognitionLine>) -> Self {
        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text, lines }
    }
}

/// Root of the recognition tree for one capture attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Full concatenated text (blocks joined with newlines).
    pub text: String,

    /// Blocks in reading order.
    pub blocks: Vec<RecognitionBlock>,
}

impl RecognitionResult {
    /// Create an empty result (engine found no text).
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            blocks: Vec::new(),
        }
    }

    /// Build a result from blocks, deriving the full text.
    pub fn from_blocks(blocks: Vec<RecognitionBlock>) -> Self {
        let text = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text, blocks }
    }

    /// Iterate every element in document order (block, then line, then
    /// element). Aggregations over the tree use this traversal so
    /// results are reproducible.
    pub fn elements(&self) -> impl Iterator<Item = &RecognitionElement> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter())
            .flat_map(|l| l.elements.iter())
    }
}
