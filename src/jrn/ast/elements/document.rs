//! Document element
//!
//!     A document owns an ordered sequence of lines; order is the line's
//!     position in the source file. Reserialization joins each line's literal
//!     with the configured separator, which makes an unmodified document
//!     byte-identical to its source.
//!
//!     Line endings are a configuration choice of the I/O layer, never
//!     auto-detected: the separator used on load must match the one the file
//!     was produced with, or round-trip fails.

use super::line::{Line, ParameterizedLine};
use crate::jrn::loader::LoaderError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Line separator used when splitting and joining document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineEnding {
    Crlf,
    Lf,
    /// `\r\n` on Windows, `\n` elsewhere
    Platform,
}

impl LineEnding {
    pub fn separator(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Configuration for splitting, joining and saving documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentConfig {
    pub line_ending: LineEnding,
    /// Omit blank raw lines when serializing
    pub skip_empty_lines: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Crlf,
            skip_empty_lines: false,
        }
    }
}

/// A parsed journal document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Path the document was loaded from, if any
    pub filename: Option<PathBuf>,
    pub lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            filename: None,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(lines: Vec<Line>) -> Self {
        Self {
            filename: None,
            lines,
        }
    }

    /// Load and parse a file, remembering its path for [`Document::save`]
    pub fn open<P: AsRef<Path>>(path: P, config: &DocumentConfig) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path.as_ref())?;
        let mut document = crate::jrn::parsing::parse_document(&source, config);
        document.filename = Some(path.as_ref().to_path_buf());
        Ok(document)
    }

    /// Exact literals of all lines, in source order
    pub fn line_literals(&self) -> Vec<String> {
        self.lines.iter().map(Line::literal).collect()
    }

    /// Reserialize the document. Blank raw lines are dropped when
    /// `skip_empty_lines` is set; everything else is emitted verbatim.
    pub fn to_text(&self, config: &DocumentConfig) -> String {
        let literals: Vec<String> = self
            .lines
            .iter()
            .filter(|line| {
                !(config.skip_empty_lines && line.as_raw().is_some_and(|raw| raw.is_empty()))
            })
            .map(Line::literal)
            .collect();
        literals.join(config.line_ending.separator())
    }

    /// Write back to the path the document was loaded from
    pub fn save(&self, config: &DocumentConfig) -> Result<(), LoaderError> {
        match &self.filename {
            Some(path) => self.save_as(path, config),
            None => Err(LoaderError::MissingFilename),
        }
    }

    pub fn save_as<P: AsRef<Path>>(
        &self,
        path: P,
        config: &DocumentConfig,
    ) -> Result<(), LoaderError> {
        fs::write(path, self.to_text(config))?;
        Ok(())
    }

    pub fn iter_parameterized(&self) -> impl Iterator<Item = &ParameterizedLine> {
        self.lines.iter().filter_map(Line::as_parameterized)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.filename = None;
    }

    pub fn close(&mut self) {
        self.clear();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::line::RawLine;
    use super::*;

    #[test]
    fn test_line_ending_separators() {
        assert_eq!(LineEnding::Crlf.separator(), "\r\n");
        assert_eq!(LineEnding::Lf.separator(), "\n");
    }

    #[test]
    fn test_default_config_splits_on_crlf() {
        let config = DocumentConfig::default();
        assert_eq!(config.line_ending, LineEnding::Crlf);
        assert!(!config.skip_empty_lines);
    }

    #[test]
    fn test_to_text_joins_literals() {
        let document = Document::with_lines(vec![
            Line::Raw(RawLine::new("// header")),
            Line::Raw(RawLine::new("")),
            Line::Raw(RawLine::new("tail")),
        ]);
        let config = DocumentConfig {
            line_ending: LineEnding::Lf,
            skip_empty_lines: false,
        };
        assert_eq!(document.to_text(&config), "// header\n\ntail");
    }

    #[test]
    fn test_to_text_skips_blank_raw_lines_when_configured() {
        let document = Document::with_lines(vec![
            Line::Raw(RawLine::new("// header")),
            Line::Raw(RawLine::new("")),
            Line::Raw(RawLine::new("tail")),
        ]);
        let config = DocumentConfig {
            line_ending: LineEnding::Lf,
            skip_empty_lines: true,
        };
        assert_eq!(document.to_text(&config), "// header\ntail");
    }

    #[test]
    fn test_save_without_filename_fails() {
        let document = Document::new();
        let result = document.save(&DocumentConfig::default());
        assert!(matches!(result, Err(LoaderError::MissingFilename)));
    }

    #[test]
    fn test_clear_resets_document() {
        let mut document = Document::with_lines(vec![Line::Raw(RawLine::new("x"))]);
        document.filename = Some(PathBuf::from("a.txt"));
        document.close();
        assert!(document.lines.is_empty());
        assert!(document.filename.is_none());
    }
}
