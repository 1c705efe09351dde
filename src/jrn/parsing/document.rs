//! Document assembly
//!
//! Splits whole-document text on the configured line separator and
//! classifies each resulting line independently. There is no cross-line
//! state: each line parses on its own, which also makes the classification
//! order-preserving by construction.

use super::line_classification::parse_line;
use crate::jrn::ast::{Document, DocumentConfig};

/// Parse a whole document. Never fails: unrecognized lines become raw lines.
pub fn parse_document(source: &str, config: &DocumentConfig) -> Document {
    let lines = source
        .split(config.line_ending.separator())
        .map(parse_line)
        .collect();
    Document::with_lines(lines)
}
