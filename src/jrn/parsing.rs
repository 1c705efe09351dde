//! Parsing for the jrn format
//!
//! Regex-driven and total: the module-level patterns in the grammar module
//! are compiled once, each line is matched against them independently, and
//! any mismatch degrades to a raw line instead of an error. The stages are:
//!
//! 1. `line_classification` - timestamp prefix, comment check, call pattern
//! 2. `parameters` - quote-aware comma splitting with separator recovery
//! 3. `document` - whole-document split/join assembly

mod grammar;

pub mod document;
pub mod line_classification;
pub mod parameters;

pub use document::parse_document;
pub use line_classification::parse_line;
pub use parameters::split_parameters;
