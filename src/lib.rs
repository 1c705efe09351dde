//! # jrn-parser
//!
//! A lossless parser for the jrn journal script format.
//!
//! Journal files are line-oriented logs of automation calls. Each line is
//! either raw passthrough text or a parameterized call:
//!
//!     /*[2023- 1-15  9: 5:30(123)]*/ JrnWdt.MouseMove(10,20);
//!     JrnCmd.CompareExpectedResult("ExportToGFCCommand", "Text");
//!     // comment lines and anything unrecognized pass through verbatim
//!
//! Parsing is total (every line yields a model value, malformed input
//! degrades to a raw line) and reversible (an unmodified document
//! reserializes byte-identically, line endings included as long as the
//! configured separator matches the source).
//!
//! Entry points: [`jrn::parsing::parse_line`] for one line,
//! [`jrn::parsing::parse_document`] for whole documents, and
//! [`jrn::loader::DocumentLoader`] for file-backed loading.

pub mod jrn;
