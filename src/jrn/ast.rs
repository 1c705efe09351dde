//! AST definitions for the jrn format
//!
//!     Journal documents are plain text, utf-8 encoded files. A document is a
//!     flat ordered sequence of lines; there is no nesting. Each line is
//!     exactly one of two variants:
//!
//!         - a parameterized line matching `module.action(params)suffix`,
//!           optionally preceded by a `/*[timestamp]*/ ` prefix, or
//!         - a raw line: blank lines, `//` comment lines, and anything that
//!           fails the call grammar, stored verbatim.
//!
//!     Every node reconstructs its exact source text via `literal()`; an
//!     unmodified document reserializes byte-identically. This is the core
//!     contract of the model and what the round-trip tests pin down.

pub mod elements;

// Re-export commonly used types at module root
pub use elements::{Document, DocumentConfig, Line, LineEnding, Parameter, ParameterizedLine, RawLine};
