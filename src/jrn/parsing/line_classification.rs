//! Line Classification
//!
//! Determines, for one line of text (no trailing newline), whether it is a
//! parameterized call or raw passthrough. Classification is total: every
//! line, however malformed, yields a [`Line`]. Pattern mismatch is never an
//! error, it triggers the raw-line fallback.

use super::grammar::{CALL_PATTERN, FULL_LINE_PATTERN};
use super::parameters::split_parameters;
use crate::jrn::ast::{Line, ParameterizedLine, RawLine};

/// Parse one line into exactly one [`Line`] variant.
///
/// Order of checks:
/// 1. A line opening with `/*` may carry a timestamp prefix; on match,
///    classification continues on the remainder (which keeps its trailing
///    `;` so the suffix capture picks it up).
/// 2. A `//` comment line is raw, never matched against the call pattern.
/// 3. The call pattern; on mismatch the whole original line is stored raw,
///    discarding any prefix captured in step 1.
pub fn parse_line(line: &str) -> Line {
    let mut prefix = "";
    let mut pure = line;
    if line.starts_with("/*") {
        if let Some(captures) = FULL_LINE_PATTERN.captures(line) {
            prefix = captures.get(1).map_or("", |m| m.as_str());
            pure = captures.get(2).map_or(line, |m| m.as_str());
        }
    }
    if !pure.starts_with("//") {
        if let Some(captures) = CALL_PATTERN.captures(pure) {
            let module = captures.get(1).map_or("", |m| m.as_str());
            let action = captures.get(2).map_or("", |m| m.as_str());
            let parameter_literal = captures.get(3).map_or("", |m| m.as_str());
            let suffix = captures.get(4).map_or("", |m| m.as_str());
            return Line::Parameterized(
                ParameterizedLine::new(module, action)
                    .with_prefix(prefix)
                    .with_parameters(split_parameters(parameter_literal))
                    .with_suffix(suffix),
            );
        }
    }
    Line::Raw(RawLine::new(line))
}
