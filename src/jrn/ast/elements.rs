//! Element-specific AST node definitions for the jrn format
//!
//! One file per element: parameters, lines (the tagged variant), and the
//! document that owns them.

pub mod document;
pub mod line;
pub mod parameter;

pub use document::{Document, DocumentConfig, LineEnding};
pub use line::{Line, ParameterizedLine, RawLine};
pub use parameter::Parameter;
