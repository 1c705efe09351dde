//! Parameter element
//!
//!     A parameter is one argument of a parameterized line. It stores the
//!     exact source text of the argument in three pieces: an optional
//!     single-space separator recovered from the original text, the value
//!     literal (quote characters retained verbatim), and an optional trailing
//!     comment annotation.
//!
//! Syntax
//!
//!     " "? <value> ("/*" <comment> "*/")?
//!
//!     Examples:
//!         10
//!          "ExportToGFCCommand"
//!         1/*bar*/
//!
//!     A quoted value may contain commas; the quotes stay part of the value.

use serde::Serialize;
use std::fmt;

/// One parsed argument of a parameterized line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// `""` or `" "`: the separator space that preceded this parameter
    pub prefix: String,
    /// The value literal, quotes included when the source was quoted
    pub value: String,
    /// Trailing comment text without the `/* */` wrapper; empty when absent
    pub comment: String,
}

impl Parameter {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            value: value.into(),
            comment: String::new(),
        }
    }

    /// Preferred builder
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The exact source text of this parameter:
    /// `prefix + value + ("/*" + comment + "*/")?`
    pub fn literal(&self) -> String {
        let mut literal =
            String::with_capacity(self.prefix.len() + self.value.len() + self.comment.len() + 4);
        literal.push_str(&self.prefix);
        literal.push_str(&self.value);
        if !self.comment.is_empty() {
            literal.push_str("/*");
            literal.push_str(&self.comment);
            literal.push_str("*/");
        }
        literal
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_bare_value() {
        assert_eq!(Parameter::new("10").literal(), "10");
    }

    #[test]
    fn test_literal_with_prefix() {
        let param = Parameter::new("\"Text\"").with_prefix(" ");
        assert_eq!(param.literal(), " \"Text\"");
    }

    #[test]
    fn test_literal_with_comment() {
        let param = Parameter::new("1").with_comment("bar");
        assert_eq!(param.literal(), "1/*bar*/");
    }

    #[test]
    fn test_empty_comment_adds_no_wrapper() {
        let param = Parameter::new("1");
        assert_eq!(param.literal(), "1");
    }

    #[test]
    fn test_display_matches_literal() {
        let param = Parameter::new("\"a,b\"").with_prefix(" ").with_comment("c");
        assert_eq!(param.to_string(), param.literal());
    }
}
