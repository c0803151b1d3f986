//! Human-readable capture report.
//!
//! Pure formatting: a labeled summary of the three fields, then the
//! full block/line/element dump. Downstream tests rely on the
//! summary-then-detail ordering and the two-decimal confidence
//! precision; keep those stable.

use std::fmt::Write;

use crate::models::document::DocumentFields;
use crate::recognition::RecognitionResult;

/// Placeholder for fields the rules did not find.
pub const NOT_FOUND: &str = "not found";

/// Render the field summary followed by the full recognition dump.
pub fn render(fields: &DocumentFields, result: &RecognitionResult) -> String {
    let mut out = String::new();

    let field = |value: &Option<String>| -> String {
        value.clone().unwrap_or_else(|| NOT_FOUND.to_string())
    };

    // Writes to a String are infallible.
    writeln!(out, "name: {}", field(&fields.name)).unwrap();
    writeln!(out, "cpf: {}", field(&fields.cpf)).unwrap();
    writeln!(out, "affiliation: {}", field(&fields.affiliation)).unwrap();

    for (b, block) in result.blocks.iter().enumerate() {
        writeln!(out).unwrap();
        writeln!(out, "block {}:", b + 1).unwrap();
        for (l, line) in block.lines.iter().enumerate() {
            writeln!(out, "  line {}: {}", l + 1, line.text).unwrap();
            for element in &line.elements {
                match element.confidence {
                    Some(confidence) => {
                        writeln!(out, "    \"{}\" ({:.2})", element.text, confidence).unwrap()
                    }
                    None => writeln!(out, "    \"{}\" (n/a)", element.text).unwrap(),
                }
            }
        }
    }

    out
}
