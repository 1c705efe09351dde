//! Line elements
//!
//!     A journal line is either a parameterized call or raw passthrough text.
//!     Both variants reconstruct their exact source text via `literal()`.
//!
//! Syntax
//!
//!     line      := full_line | raw_line
//!     full_line := "/*" timestamp "*/ " call_or_raw
//!     call      := module "." action "(" params ")" suffix
//!     module    := "Jrn" letter letter letter
//!
//!     Examples:
//!         JrnCmd.CompareExpectedResult("ExportToGFCCommand", "Text");
//!         /*[2023- 1-15  9: 5:30(123)]*/ JrnWdt.MouseMove(10,20);
//!         // a comment line, stored raw
//!
//! Blank lines, comment lines and anything that fails the call grammar are
//! stored as [`RawLine`], content verbatim.

use super::parameter::Parameter;
use serde::Serialize;
use std::fmt;

/// A line matching the `module.action(params)suffix` grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterizedLine {
    /// Timestamp text without the `/* */` wrapper; empty when absent
    pub prefix: String,
    pub module: String,
    pub action: String,
    pub parameters: Vec<Parameter>,
    /// Everything after the closing `)`, verbatim (typically `;` plus an
    /// optional trailing comment)
    pub suffix: String,
}

impl ParameterizedLine {
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            module: module.into(),
            action: action.into(),
            parameters: Vec::new(),
            suffix: String::new(),
        }
    }

    /// Preferred builder
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Malformed/cleared state; not produced by parsing
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.module.is_empty()
            && self.action.is_empty()
            && self.parameters.is_empty()
    }

    pub fn literal(&self) -> String {
        let mut literal = String::new();
        if !self.prefix.is_empty() {
            literal.push_str("/*");
            literal.push_str(&self.prefix);
            literal.push_str("*/ ");
        }
        literal.push_str(&self.module);
        literal.push('.');
        literal.push_str(&self.action);
        literal.push('(');
        literal.push_str(&self.parameter_literal());
        literal.push(')');
        literal.push_str(&self.suffix);
        literal
    }

    pub fn clear(&mut self) {
        self.prefix.clear();
        self.module.clear();
        self.action.clear();
        self.parameters.clear();
        self.suffix.clear();
    }

    /// Parameter literals joined with `,`. Inter-parameter spaces live inside
    /// each parameter's own prefix, so nothing is added here.
    fn parameter_literal(&self) -> String {
        self.parameters
            .iter()
            .map(Parameter::literal)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A line without parameterization: blank lines, comment lines, and anything
/// that fails the call grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLine {
    pub content: String,
}

impl RawLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn literal(&self) -> &str {
        &self.content
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }
}

/// One journal line; exactly one variant per source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Line {
    Parameterized(ParameterizedLine),
    Raw(RawLine),
}

impl Line {
    /// A raw line is self-consistent by definition. The flag on parameterized
    /// lines is reserved for semantic validation and currently always false.
    pub fn is_valid(&self) -> bool {
        match self {
            Line::Parameterized(_) => false,
            Line::Raw(_) => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Line::Parameterized(line) => line.is_empty(),
            Line::Raw(line) => line.is_empty(),
        }
    }

    /// The exact source text of this line
    pub fn literal(&self) -> String {
        match self {
            Line::Parameterized(line) => line.literal(),
            Line::Raw(line) => line.literal().to_string(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Line::Parameterized(line) => line.clear(),
            Line::Raw(line) => line.clear(),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Line::Parameterized(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Line::Raw(_))
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedLine> {
        match self {
            Line::Parameterized(line) => Some(line),
            Line::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawLine> {
        match self {
            Line::Parameterized(_) => None,
            Line::Raw(line) => Some(line),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}
