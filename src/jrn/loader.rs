//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading journal
//! source text from files or strings and parsing it. The parser itself is
//! total and never fails; only the I/O surface produces errors.
//!
//! # Example
//!
//! ```rust
//! use jrn_parser::jrn::ast::DocumentConfig;
//! use jrn_parser::jrn::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_string("JrnDbg.Foo();");
//! let doc = loader.parse(&DocumentConfig::default());
//! assert_eq!(doc.lines.len(), 1);
//! ```

use crate::jrn::ast::{Document, DocumentConfig};
use crate::jrn::parsing::parse_document;
use std::fs;
use std::path::Path;

/// Error that can occur when loading or saving documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading or writing a file
    IoError(String),
    /// `save()` on a document that was never loaded from a path
    MissingFilename,
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::MissingFilename => {
                write!(f, "document has no filename; use save_as")
            }
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

/// Loads journal source text and parses it into a [`Document`]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into a [`Document`]. Parsing is total, so unlike
    /// loading this cannot fail.
    pub fn parse(&self, config: &DocumentConfig) -> Document {
        parse_document(&self.source, config)
    }

    /// Get a reference to the raw source string
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
